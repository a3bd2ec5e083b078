use std::collections::HashMap;

use crate::api::{CommandSpec, Entry, ParameterSpec};
use crate::parser::ConfigError;

/// Flatten the entries of `root`, expanding every embed depth-first in declaration order.
pub(crate) fn flatten<'s>(
    root: &'s CommandSpec,
    registry: &HashMap<&str, &'s CommandSpec>,
) -> Result<Vec<&'s ParameterSpec>, ConfigError> {
    let mut parameters = Vec::default();
    let mut path = vec![root.name().to_string()];
    expand(root, registry, &mut path, &mut parameters)?;
    Ok(parameters)
}

fn expand<'s>(
    spec: &'s CommandSpec,
    registry: &HashMap<&str, &'s CommandSpec>,
    path: &mut Vec<String>,
    parameters: &mut Vec<&'s ParameterSpec>,
) -> Result<(), ConfigError> {
    for entry in spec.entries() {
        match entry {
            Entry::Parameter(parameter) => parameters.push(parameter),
            Entry::Embed(name) => {
                if path.contains(name) {
                    let mut cycle = path.clone();
                    cycle.push(name.clone());
                    return Err(ConfigError::CyclicEmbed(cycle));
                }

                let embedded = registry
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| ConfigError::UnknownEmbed {
                        command: spec.name().to_string(),
                        name: name.clone(),
                    })?;
                path.push(name.clone());
                expand(embedded, registry, path, parameters)?;
                path.pop();
            }
        }
    }

    Ok(())
}
