use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use boxoffice_core::AccountId;
use boxoffice_tickets::{
    CategoryTotals, GatewayError, PaymentGateway, SeatExemptSet, SeatReservationGateway,
    TicketCategory, TicketLine, TicketService, seats_to_reserve, total_price,
};

/// Gateways that accept everything and do nothing.
struct NoopGateway;

impl PaymentGateway for NoopGateway {
    fn make_payment(&self, _account_id: AccountId, _amount: u64) -> Result<(), GatewayError> {
        Ok(())
    }
}

impl SeatReservationGateway for NoopGateway {
    fn reserve_seats(&self, _account_id: AccountId, _seats: u64) -> Result<(), GatewayError> {
        Ok(())
    }
}

fn lines(count: usize) -> Vec<TicketLine> {
    (0..count)
        .map(|i| TicketLine::new(TicketCategory::ALL[i % 3], (i % 2) as u32))
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_lines");

    for count in [1usize, 10, 100, 1_000] {
        let input = lines(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| CategoryTotals::from_lines(black_box(input)));
        });
    }

    group.finish();
}

fn bench_pricing(c: &mut Criterion) {
    let totals = CategoryTotals::new(6, 3, 6);
    let prices = Default::default();
    let exempt = SeatExemptSet::default();

    c.bench_function("price_and_seats", |b| {
        b.iter(|| {
            (
                total_price(black_box(&totals), &prices),
                seats_to_reserve(black_box(&totals), &exempt),
            )
        });
    });
}

fn bench_purchase(c: &mut Criterion) {
    let service = TicketService::with_defaults(NoopGateway, NoopGateway);
    let order = [
        TicketLine::child(2),
        TicketLine::adult(1),
        TicketLine::infant(6),
        TicketLine::adult(5),
        TicketLine::child(1),
    ];

    c.bench_function("purchase_tickets", |b| {
        b.iter(|| service.purchase_tickets(black_box(7025), black_box(&order)).unwrap());
    });
}

criterion_group!(benches, bench_aggregation, bench_pricing, bench_purchase);
criterion_main!(benches);
