use async_trait::async_trait;
use bakery::checkout::{CheckoutFlow, CheckoutRequest, PaymentReceipt, PaymentRequest, DEFAULT_DELIVERY_FEE};
use bakery::contact::ContactForm;
use bakery::{Cart, CartHandle, Catalog, PaymentGateway, StoreResult};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

// --- Helper: gateway that approves instantly ---
struct InstantGateway;

#[async_trait]
impl PaymentGateway for InstantGateway {
  async fn charge(&self, request: &PaymentRequest) -> StoreResult<PaymentReceipt> {
    Ok(PaymentReceipt {
      reference: "BENCH".to_string(),
      amount: request.amount,
    })
  }
}

fn bench_contact() -> ContactForm {
  ContactForm {
    email: "bench@example.com".to_string(),
    first_name: "Bench".to_string(),
    last_name: "Mark".to_string(),
    phone: "0".to_string(),
    address: "1 Loop Road".to_string(),
    city: "Lagos".to_string(),
    state: "Lagos State".to_string(),
  }
}

// --- Benchmark Functions ---

fn bench_add_to_cart(c: &mut Criterion) {
  let mut group = c.benchmark_group("CartAdd");
  let catalog = Catalog::seeded();

  for adds in [6u64, 60, 600].iter() {
    group.throughput(Throughput::Elements(*adds));
    group.bench_with_input(BenchmarkId::from_parameter(adds), adds, |b, &adds| {
      b.iter(|| {
        let mut cart = Cart::new();
        for product in catalog.products().iter().cycle().take(adds as usize) {
          cart.add_to_cart(product);
        }
        cart
      });
    });
  }
  group.finish();
}

fn bench_totals(c: &mut Criterion) {
  let mut cart = Cart::new();
  for product in Catalog::seeded().products() {
    cart.add_to_cart(product);
    cart.update_quantity(product.id, 7);
  }

  c.bench_function("CartTotals/total_items", |b| b.iter(|| cart.total_items()));
  c.bench_function("CartTotals/total_price", |b| b.iter(|| cart.total_price()));
}

fn bench_checkout_flow(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let flow = CheckoutFlow::new(Arc::new(InstantGateway));
  let catalog = Catalog::seeded();
  let (flow, catalog) = (&flow, &catalog);

  c.bench_function("CheckoutFlow/instant_gateway", |b| {
    b.to_async(&rt).iter(|| async move {
      let cart = CartHandle::default();
      cart.update(|c| {
        for product in catalog.products() {
          c.add_to_cart(product);
        }
      });
      let request = CheckoutRequest {
        form: bench_contact(),
        cart,
        profile: None,
        delivery_fee: DEFAULT_DELIVERY_FEE,
        placed_on: chrono::NaiveDate::MIN,
      };
      flow.checkout(request).await.unwrap()
    })
  });
}

criterion_group!(benches, bench_add_to_cart, bench_totals, bench_checkout_flow);
criterion_main!(benches);
