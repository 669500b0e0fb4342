use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use shared::order::PaymentMethod;

use pos_terminal::catalog::Catalog;
use pos_terminal::config::{AppSettings, Config};
use pos_terminal::orders::{OrderWorkflow, SimulatedGateway};
use pos_terminal::printing::ConsolePrinter;
use pos_terminal::reporting::StorageSalesRecorder;
use pos_terminal::storage::PosStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.data_dir)?;
    pos_terminal::logger::init_logger_with_file(Some(&config.log_level), Some(&config.data_dir));

    tracing::info!("POS terminal starting...");

    let storage = PosStorage::open(Path::new(&config.data_dir).join("pos.redb"))?;
    let settings = AppSettings::load_or_default(&storage);
    let catalog = Catalog::load(Path::new(&config.data_dir).join("menu.json"));

    tracing::info!(
        "{}: {} menu entries, tax rate {}%",
        settings.business_name,
        catalog.entries().len(),
        settings.tax_rate
    );

    let mut workflow = OrderWorkflow::new(
        &settings,
        Arc::new(SimulatedGateway::default()),
        Arc::new(StorageSalesRecorder::new(storage.clone())),
        Arc::new(ConsolePrinter),
    );

    // Demo transaction until a UI adapter drives the workflow: one burger
    // and two colas for table T1, paid in cash.
    let burger = catalog
        .find(1)
        .ok_or_else(|| anyhow::anyhow!("menu entry 1 missing"))?
        .clone();
    let cola = catalog
        .find(4)
        .ok_or_else(|| anyhow::anyhow!("menu entry 4 missing"))?
        .clone();

    workflow.cart_mut().add_item(burger)?;
    workflow.cart_mut().add_item(cola.clone())?;
    workflow.cart_mut().add_item(cola)?;
    workflow.cart_mut().set_table("T1")?;

    let total = workflow.cart().order().total;
    tracing::info!("Order #{} total: KSh {:.2}", workflow.order_number(), total);

    let tendered = total + Decimal::from(100);
    let record = workflow.pay(PaymentMethod::Cash { tendered }).await?;
    tracing::info!(
        "Change due: KSh {:.2}",
        record.change.unwrap_or(Decimal::ZERO)
    );

    let sales = storage.completed_orders()?;
    tracing::info!("Sales log now holds {} completed order(s)", sales.len());

    Ok(())
}
