use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeReader, TypeTag};
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
enum Country {
    Canada,
    Pakistan,
}

impl FromStr for Country {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "canada" => Ok(Country::Canada),
            "pakistan" => Ok(Country::Pakistan),
            _ => Err(format!("unknown: {}", value)),
        }
    }
}

fn main() {
    let country = TypeTag::new("country");
    let parser = CommandLineParser::new()
        .reader(country.clone(), TypeReader::custom::<Country>("country"))
        .group(
            CommandSpec::new("common")
                .add(ParameterSpec::flag("verbose").short('v').help("Do dee doo.")),
        )
        .command(
            CommandSpec::new("foo")
                .about("Add up the items.")
                .add(ParameterSpec::optional("initial", TypeTag::INT))
                .add(ParameterSpec::repeated("item", TypeTag::INT).short('i').help("The items."))
                .embed("common"),
        )
        .command(
            CommandSpec::new("bar")
                .about("Visit some countries.")
                .add(ParameterSpec::option("country", TypeTag::seq(&country)))
                .embed("common"),
        )
        .allow_positional(true)
        .fit_terminal()
        .build()
        .expect("Invalid argument parser configuration");

    let values = parser.parse();
    let verbose = values.get_bool("verbose").unwrap_or(false);
    println!("Used sub-command '{}'.", values.command());

    match values.command() {
        "foo" => {
            let initial = values.get_int("initial").unwrap_or(0);
            let items = values.get_seq("item").unwrap_or_default();
            let sum: i64 = initial + items.iter().filter_map(|item| item.as_int()).sum::<i64>();

            if verbose {
                println!("Initial: {initial}, items: {items:?}");
            }

            println!("Foo: {sum}");
        }
        "bar" => {
            let countries: Vec<&Country> = values
                .get_seq("country")
                .unwrap_or_default()
                .iter()
                .filter_map(|value| value.downcast_ref::<Country>())
                .collect();
            println!("Bar: {countries:?}");
        }
        _ => {
            panic!("impossible - the parser rejects any command not registered via `command(..)`.")
        }
    }
}
