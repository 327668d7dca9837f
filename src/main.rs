use mission_tasking::frontend::cli::cli;


fn main() {
    cli();
}
