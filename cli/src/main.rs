use calculator_core::{Calculator, PI, VERSION, compute_area, generate_fibonacci, power};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io::BufRead;
use std::io::BufReader;
use tracing::debug;

/// Calculator - drive the calculator engine from the command line
#[derive(Parser, Debug)]
#[command(name = "calculator", version = VERSION)]
#[command(about = "Run calculator operations", long_about = None)]
struct Args {
    /// Log engine decisions (same as RUST_LOG=debug)
    #[arg(long, short)]
    verbose: bool,

    /// Operation to run (if not provided, reads one operation per line from stdin)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// a + b
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a - b
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a * b
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a / b
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Sum of the given numbers
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Mean of the given numbers
    Average {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// base ** exponent
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
    /// Area of a circle
    Area {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// First n fibonacci numbers
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Greeting for a name
    Greet { name: String },
    /// Print PI and VERSION
    Version,
    /// Walk through every operation
    Demo,
}

/// Parses one stdin line as a command, reusing the subcommand grammar.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

fn run(calc: &Calculator, command: &Command) -> Result<String> {
    debug!(?command, "running");
    let output = match command {
        Command::Add { a, b } => calc.add(*a, *b).to_string(),
        Command::Subtract { a, b } => calc.subtract(*a, *b).to_string(),
        Command::Multiply { a, b } => calc.multiply(*a, *b).to_string(),
        Command::Divide { a, b } => calc.divide(*a, *b).into_diagnostic()?.to_string(),
        Command::Sum { numbers } => calc.sum(numbers).to_string(),
        Command::Average { numbers } => calc.average(numbers).into_diagnostic()?.to_string(),
        Command::Power { base, exponent } => power(*base, *exponent).to_string(),
        Command::Area { radius } => compute_area(*radius).into_diagnostic()?.to_string(),
        Command::Fib { n } => format!("{:?}", generate_fibonacci(*n).into_diagnostic()?),
        Command::Greet { name } => calc.greet(name),
        Command::Version => format!("PI = {PI}\nVERSION = {VERSION}"),
        Command::Demo => demo(),
    };
    Ok(output)
}

fn demo() -> String {
    let mut out = Vec::new();

    out.push("=== Basic usage ===".to_string());
    let calc = Calculator::new();
    out.push(format!("2 + 3 = {}", calc.add(2.0, 3.0)));
    out.push(format!("10 - 4 = {}", calc.subtract(10.0, 4.0)));
    out.push(format!("6 * 7 = {}", calc.multiply(6.0, 7.0)));
    match calc.divide(15.0, 3.0) {
        Ok(q) => out.push(format!("15 / 3 = {q}")),
        Err(e) => out.push(format!("15 / 3 failed: {e}")),
    }

    out.push("=== Held value ===".to_string());
    let mut calc1 = Calculator::new();
    out.push(format!("initial value: {}", calc1.value()));
    calc1.set_value(42.5);
    out.push(format!("after set_value: {}", calc1.value()));
    let calc2 = Calculator::with_value(100.0);
    out.push(format!("constructed with: {}", calc2.value()));

    out.push("=== Sequences ===".to_string());
    let numbers = [1.5, 2.5, 3.5, 4.5, 5.5];
    out.push(format!("numbers: {numbers:?}"));
    out.push(format!("sum: {}", calc.sum(&numbers)));
    match calc.average(&numbers) {
        Ok(mean) => out.push(format!("average: {mean}")),
        Err(e) => out.push(format!("average failed: {e}")),
    }

    out.push("=== Static power ===".to_string());
    out.push(format!("2^8 = {}", Calculator::power(2.0, 8.0)));

    out.push("=== Free functions ===".to_string());
    match compute_area(10.0) {
        Ok(area) => out.push(format!("area of radius 10: {area}")),
        Err(e) => out.push(format!("area failed: {e}")),
    }
    match generate_fibonacci(15) {
        Ok(fib) => out.push(format!("first 15 fibonacci numbers: {fib:?}")),
        Err(e) => out.push(format!("fibonacci failed: {e}")),
    }

    out.push("=== Greeting ===".to_string());
    out.push(calc.greet("developer"));

    out.push("=== Constants ===".to_string());
    out.push(format!("PI = {PI}"));
    out.push(format!("VERSION = {VERSION}"));

    out.push("=== Error handling ===".to_string());
    if let Err(e) = calc.divide(10.0, 0.0) {
        out.push(format!("caught: {e}"));
    }
    if let Err(e) = calc.average(&[]) {
        out.push(format!("caught: {e}"));
    }

    out.join("\n")
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level; --verbose forces debug. Default to WARN.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn"))
            .into_diagnostic()?
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let calc = Calculator::new();

    if let Some(command) = args.command {
        println!("{}", run(&calc, &command)?);
        return Ok(());
    }

    // Pipe/stdin mode: failures are reported per line and do not stop the loop
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let parsed = match Line::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        match run(&calc, &parsed.command) {
            Ok(output) => println!("{output}"),
            Err(report) => eprintln!("{report:?}"),
        }
    }

    Ok(())
}
