use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = finance_plot::args::parse_returns();
    finance_plot::cli::main_returns(args)
}
