mod command;
mod logging;

fn main() -> anyhow::Result<()> {
    command::run()
}
