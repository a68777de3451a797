use monthgrid::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    Cli::run()
}
