fn main() -> anyhow::Result<()> {
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    oratus::app_core::Oratus::new()?.run()?;
    Ok(())
}
