use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command{
    Command::new("subsample-seq")
        .version("0.1.0")
        .about("Subsample FASTA and FASTQ files.")
        .long_about(
            "Draws a uniform random sample of records from a FASTA or FASTQ file in a single pass \
             (reservoir sampling) and writes it back in the same format.",
        )
        .arg(
            Arg::new("file-format")
                .short('f')
                .long("file-format")
                .value_name("fasta|fastq")
                .help("Format of the input and the output. Inferred from the input file extension if not given"),
        )
        .arg(
            Arg::new("sample-size")
                .short('n')
                .long("sample-size")
                .value_name("N")
                .default_value("100")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Number of records to sample"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Seed for the random number generator. Omit for a different sample on every run"),
        )
        .arg(
            Arg::new("progress")
                .short('p')
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress spinner on stderr"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print debug messages to stderr"),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .required(true)
                .help("Input filename, - for stdin"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .default_value("-")
                .help("Output filename, - for stdout"),
        )
}
