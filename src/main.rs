fn main() -> Result<(), Box<dyn std::error::Error>> {
    solace::cli::main()
}
