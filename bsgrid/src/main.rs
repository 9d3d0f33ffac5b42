use bsgrid_lib::{CssBuilder, LayoutError, LayoutSpec};
use clap::Parser;
use std::fs;
use std::process;

#[derive(Parser)]
#[command(name = "bsgrid")]
#[command(about = "Render Bootstrap grid column classes from a compact layout description")]
struct Args {
    /// Column size rules, e.g. "12 md:6 xl:auto".
    #[arg(long)]
    size: Option<String>,

    /// Column offset rules, e.g. "md:3".
    #[arg(long)]
    offset: Option<String>,

    /// Column order rules, e.g. "first lg:last".
    #[arg(long)]
    order: Option<String>,

    /// JSON layout file. Inline flags override its fields.
    #[arg(short, long)]
    layout: Option<String>,

    /// Print a complete `class="..."` attribute instead of the bare class list.
    #[arg(short, long)]
    attribute: bool,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    let file_spec = match &args.layout {
        Some(path) => match fs::read_to_string(path) {
            Ok(json) => {
                log::debug!("read layout file {}", path);
                exit_on_error(LayoutSpec::from_json(&json))
            }
            Err(e) => {
                eprintln!("Error reading layout file {}: {}", path, e);
                process::exit(1);
            }
        },
        None => LayoutSpec::default(),
    };

    let inline_spec = LayoutSpec {
        size: args.size,
        offset: args.offset,
        order: args.order,
    };
    let spec = file_spec.merge(inline_spec);
    log::debug!("rendering layout {:?}", spec);

    let classes = exit_on_error(spec.to_layout()).to_class();
    if args.attribute {
        println!("class=\"{}\"", classes);
    } else {
        println!("{}", classes);
    }
}

fn exit_on_error<T>(result: Result<T, LayoutError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
