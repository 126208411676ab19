//! An example to parse a URL from the CLI argument.

use url_parts::Url;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URL

FLAGS:
    -h, --help      Prints this help
    -r, --request   Handle the input as a request URI (absolute URL or absolute path)
    -g, --generic   Handle the input as a URL reference (default)

ARGS:
    <URL>           URL
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// Parsing mode.
#[derive(Debug, Default, Clone, Copy)]
enum Mode {
    /// Any URL reference.
    #[default]
    Generic,
    /// URL of an HTTP request line.
    Request,
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URL.
    url: String,
    /// Parsing mode.
    mode: Mode,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut url = None;
        let mut mode = None;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--generic" | "-g" => mode = Some(Mode::Generic),
                "--request" | "-r" => mode = Some(Mode::Request),
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if url.replace(arg).is_some() {
                        die("URL can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if url.replace(arg).is_some() {
                die("URL can be specified at most once");
            }
        }

        let url = url.unwrap_or_else(|| die("URL should be specified"));
        let mode = mode.unwrap_or_default();
        Self { url, mode }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let raw = opt.url.as_str();
    let parsed = match opt.mode {
        Mode::Generic => Url::parse(raw),
        Mode::Request => Url::parse_uri(raw),
    };
    let url = match parsed {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
    };
    println!("Successfully parsed: {}", url);

    print_component("scheme", url.scheme());
    print_component("opaque", url.opaque());
    print_component("username", url.username());
    if let Some(password) = url.password() {
        println!("    password: {:?}", password);
    }
    print_component("hostname", url.hostname());
    print_component("port", url.port());
    print_component("path", url.path());
    print_component("raw path", url.raw_path());
    for (key, value) in url.query().iter() {
        println!("    query: {:?} = {:?}", key, value);
    }
    print_component("fragment", url.fragment());
    println!("Request URI: {}", url.request_uri());
}

fn print_component(name: &str, value: &str) {
    if !value.is_empty() {
        println!("    {}: {:?}", name, value);
    }
}
