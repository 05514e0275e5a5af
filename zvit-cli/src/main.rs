//! zvit binary entry point

fn main() -> anyhow::Result<()> {
    zvit_cli::run()
}
