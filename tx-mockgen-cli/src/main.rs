use std::error::Error;

use clap::Parser;

use tx_mockgen::generator::{Generator, DEFAULT_NUM_RECORDS};
use tx_mockgen::writer::{write_csv, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of mock records to generate
    #[clap(short = 'n', long, default_value_t = DEFAULT_NUM_RECORDS)]
    count: u32,
    /// The output file of mock transactions
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let mut generator = Generator::new();
    let records = generator.batch(cli.count);

    write_csv(&cli.output, &records)?;
    println!("CSV file '{}' has been created.", cli.output);

    Ok(())
}
