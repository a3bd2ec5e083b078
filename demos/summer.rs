use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeTag};

fn main() {
    let parser = CommandLineParser::new()
        .command(
            CommandSpec::new("summer")
                .about("Sum the items.")
                .add(ParameterSpec::leftover("item", TypeTag::UINT).help("The items to sum."))
                .add(ParameterSpec::flag("verbose").short('v')),
        )
        .fit_terminal()
        .build()
        .expect("Invalid argument parser configuration");

    let values = parser.parse();
    let items: Vec<i64> = values
        .get_seq("item")
        .unwrap_or_default()
        .iter()
        .filter_map(|item| item.as_int())
        .collect();

    if values.get_bool("verbose") == Some(true) {
        println!("Items: {items:?}");
    }

    let sum: i64 = items.iter().sum();
    println!("Sum: {sum}");
}
