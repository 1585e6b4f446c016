mod cli;
mod layout;
mod logging;
mod materialize;
mod runner;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
