fn main() -> anyhow::Result<()> {
    juicebar_observability::init();

    let config = juicebar_recipes::EngineConfig::from_env()?;
    let mut engine = juicebar_recipes::RecipeEngine::new(config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    juicebar_kiosk::run(&mut engine, &args, &mut stdout.lock())
}
