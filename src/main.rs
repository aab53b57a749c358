use clap::{arg, value_parser, ArgMatches};
use log::info;
use std::path::PathBuf;
use topicassign::solver::LpSolve;
use topicassign::error::InputFile;
use topicassign::{ilp, io, report, Error};

fn main() {
    let args = parse_cli_args();

    env_logger::Builder::new()
        .filter_level(match args.get_count("verbose") {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
    std::process::exit(exitcode::OK);
}

fn parse_cli_args() -> ArgMatches {
    clap::command!()
        .arg(
            arg!(-t --topics <FILE> "File in which each line contains the name of a topic. The line always has to \
                 start with a multiplicity, e.g. 1x, 2x, ...")
            .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-p --preferences <FILE> "File in which each line contains a student. Lines start with the name of \
                 the student (without spaces) followed by the topic ids (starting at 1 for the first topic) ordered \
                 by preference.")
            .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-w --weights <FILE> "File in which the n-th number specifies how much weight is put on the n-th \
                 choice of a student.")
            .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(-r --"show-results" "Show the assignment of students to topics"))
        .arg(arg!(--"by-topic" "Show the assignment grouped by topic (implies --show-results)"))
        .arg(
            arg!(-o --output [FILE] "Write the assignment as JSON to this file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--solver [EXECUTABLE] "The lp_solve executable to use")
                .value_parser(value_parser!(PathBuf))
                .default_value("lp_solve"),
        )
        .arg(
            arg!(--"lp-file" [FILE] "Additionally store the generated integer program in this file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(-v --verbose ... "Print more information (use twice for debug output)"))
        .get_matches()
}

/// Open the input file given by the command line argument `name`
fn open_input(args: &ArgMatches, name: &str, file: InputFile) -> Result<std::fs::File, Error> {
    let path = args.get_one::<PathBuf>(name).expect("required argument");
    std::fs::File::open(path).map_err(|source| Error::Open {
        file,
        path: path.clone(),
        source,
    })
}

fn run(args: &ArgMatches) -> Result<(), Error> {
    let topics = io::plain::read_topics(open_input(args, "topics", InputFile::Topics)?)?;
    let students = io::plain::read_preferences(open_input(args, "preferences", InputFile::Preferences)?, topics.len())?;
    let weights = io::plain::read_weights(open_input(args, "weights", InputFile::Weights)?)?;
    info!("Read {} topics and {} students", topics.len(), students.len());

    if let Some(path) = args.get_one::<PathBuf>("lp-file") {
        std::fs::write(path, ilp::program_text(&topics, &students, &weights))
            .map_err(|e| Error::io(format!("Could not write program to '{}'", path.display()), e))?;
        info!("Stored integer program in {}", path.display());
    }

    let solver = LpSolve::new(args.get_one::<PathBuf>("solver").expect("default value").clone());
    let (assignment, reward) = ilp::solve(&solver, &topics, &students, &weights)?;
    let unsatisfied = report::count_unsatisfied(&assignment, &students);

    println!("Students that did not get any of their priorities: {}", unsatisfied);
    info!("Total reward: {}", reward);
    if args.get_flag("by-topic") {
        print!("{}", report::format_topic_overview(&assignment, &topics, &students));
    } else if args.get_flag("show-results") {
        print!("{}", report::format_assignment(&assignment, &topics, &students));
    }

    if let Some(path) = args.get_one::<PathBuf>("output") {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::io(format!("Could not create output file '{}'", path.display()), e))?;
        io::simple::write(file, &assignment, &topics, &students, unsatisfied, reward)?;
        info!("Wrote result to {}", path.display());
    }

    Ok(())
}
