use anyhow::Result;

fn main() -> Result<()> {
    dev_cleaner_status::logging::init();
    dev_cleaner_status::cli::run()
}
