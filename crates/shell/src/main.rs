use anyhow::Context;

use slicepos_menu::{Catalog, CatalogConfig};
use slicepos_shell::Register;

fn main() -> anyhow::Result<()> {
    slicepos_observability::init();

    let catalog = load_catalog()?;
    tracing::info!(
        pizzas = catalog.pizzas().len(),
        drinks = catalog.drinks().len(),
        side_dishes = catalog.side_dishes().len(),
        toppings = catalog.toppings().len(),
        "catalog loaded"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut register = Register::new(catalog);
    register.run(&mut stdin.lock(), &mut stdout.lock())
}

fn load_catalog() -> anyhow::Result<Catalog> {
    match std::env::var("SLICEPOS_MENU") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read menu file {path}"))?;
            let config = CatalogConfig::from_json(&json)
                .with_context(|| format!("invalid menu file {path}"))?;
            Ok(Catalog::new(config))
        }
        Err(_) => Ok(Catalog::standard()),
    }
}
