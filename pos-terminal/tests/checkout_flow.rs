//! End-to-end checkout scenarios against real storage

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use shared::order::{Order, PaymentMethod, ServiceType};

use pos_terminal::catalog::Catalog;
use pos_terminal::config::AppSettings;
use pos_terminal::orders::{OrderWorkflow, SimulatedGateway};
use pos_terminal::printing::ReceiptPrinter;
use pos_terminal::reporting::StorageSalesRecorder;
use pos_terminal::storage::PosStorage;

#[derive(Default)]
struct CountingPrinter {
    count: AtomicUsize,
}

impl ReceiptPrinter for CountingPrinter {
    fn print(&self, _receipt: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

fn workflow_with(
    storage: &PosStorage,
    gateway: SimulatedGateway,
) -> (OrderWorkflow, Arc<CountingPrinter>) {
    let printer = Arc::new(CountingPrinter::default());
    let workflow = OrderWorkflow::new(
        &AppSettings::default(),
        Arc::new(gateway),
        Arc::new(StorageSalesRecorder::new(storage.clone())),
        printer.clone(),
    );
    (workflow, printer)
}

#[tokio::test]
async fn cash_checkout_records_and_resets() {
    let dir = tempfile::tempdir().unwrap();
    let storage = PosStorage::open(dir.path().join("pos.redb")).unwrap();
    let (mut workflow, printer) = workflow_with(&storage, SimulatedGateway::instant());
    let catalog = Catalog::sample();

    // 1x chicken burger (800) + 2x Coca Cola (150) @ 16% tax
    workflow
        .cart_mut()
        .add_item(catalog.find(1).unwrap().clone())
        .unwrap();
    workflow
        .cart_mut()
        .add_item(catalog.find(4).unwrap().clone())
        .unwrap();
    workflow.cart_mut().increment_line(4).unwrap();
    workflow.cart_mut().set_table("T5").unwrap();

    let order = workflow.cart().order();
    assert_eq!(order.subtotal, Decimal::from(1100));
    assert_eq!(order.tax, Decimal::from(176));
    assert_eq!(order.total, Decimal::from(1276));

    let record = workflow
        .pay(PaymentMethod::Cash {
            tendered: Decimal::from(1300),
        })
        .await
        .unwrap();

    assert_eq!(record.payment_method, "cash");
    assert_eq!(record.amount_paid, Decimal::from(1300));
    assert_eq!(record.change, Some(Decimal::from(24)));
    assert_eq!(record.table, "T5");
    assert_eq!(printer.count.load(Ordering::SeqCst), 1);

    // Order is reset to the pristine empty state
    assert_eq!(workflow.cart().order(), &Order::new());

    // Record persisted to the sales log
    let sales = storage.completed_orders().unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].amount_paid, Decimal::from(1300));
    assert_eq!(sales[0].subtotal, Decimal::from(1100));
}

#[tokio::test(start_paused = true)]
async fn mobile_money_waits_for_confirmation_then_completes() {
    let storage = PosStorage::open_in_memory().unwrap();
    let (mut workflow, printer) = workflow_with(
        &storage,
        SimulatedGateway {
            mobile_money_delay: Duration::from_secs(3),
            card_delay: Duration::from_secs(2),
        },
    );
    let catalog = Catalog::sample();

    workflow
        .cart_mut()
        .add_item(catalog.find(2).unwrap().clone())
        .unwrap();
    workflow
        .cart_mut()
        .set_service_type(ServiceType::TakeAway)
        .unwrap();

    let total = workflow.cart().order().total;
    let record = workflow
        .pay(PaymentMethod::MobileMoney {
            phone: "0712345678".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(record.payment_method, "mobile-money");
    assert_eq!(record.amount_paid, total);
    assert!(record.change.is_none());
    assert_eq!(printer.count.load(Ordering::SeqCst), 1);
    assert_eq!(storage.completed_orders().unwrap().len(), 1);
}

#[tokio::test]
async fn consecutive_orders_accumulate_in_the_sales_log() {
    let storage = PosStorage::open_in_memory().unwrap();
    let (mut workflow, _) = workflow_with(&storage, SimulatedGateway::instant());
    let catalog = Catalog::sample();

    for _ in 0..3 {
        workflow
            .cart_mut()
            .add_item(catalog.find(11).unwrap().clone())
            .unwrap();
        workflow
            .cart_mut()
            .set_service_type(ServiceType::TakeAway)
            .unwrap();
        workflow
            .pay(PaymentMethod::Card {
                number: "4111 1111 1111 1111".to_string(),
                expiry: "12/27".to_string(),
                cvv: "123".to_string(),
            })
            .await
            .unwrap();
    }

    let sales = storage.completed_orders().unwrap();
    assert_eq!(sales.len(), 3);
    assert!(sales.iter().all(|r| r.payment_method == "card"));
}
