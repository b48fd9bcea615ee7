use std::io;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let code = roster_cli::run(
        &refs,
        &mut input,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    std::process::exit(code);
}
