//! Benchmarks for the per-request authorization hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use steward_authz::{effective_permissions, has, Permission, Principal, Role};
use steward_core::{TenantId, UserId};

fn bench_resolution(c: &mut Criterion) {
    let role_default = Principal::new(TenantId::new(), UserId::new(), Role::Editor);
    let overridden = Principal::new(TenantId::new(), UserId::new(), Role::Viewer)
        .with_custom_permissions(vec![
            Permission::PersonsView,
            Permission::PersonsEdit,
            Permission::SchedulesView,
            Permission::LettersCreate,
        ]);
    let superuser = Principal::new(TenantId::new(), UserId::new(), Role::Viewer).with_superuser();

    c.bench_function("effective_permissions/role_default", |b| {
        b.iter(|| effective_permissions(black_box(&role_default)))
    });

    c.bench_function("effective_permissions/custom_override", |b| {
        b.iter(|| effective_permissions(black_box(&overridden)))
    });

    c.bench_function("effective_permissions/superuser", |b| {
        b.iter(|| effective_permissions(black_box(&superuser)))
    });

    c.bench_function("has/point_check", |b| {
        b.iter(|| has(black_box(&role_default), black_box(Permission::ProgramsView)))
    });

    // The request pattern: resolve once, check many times against the set.
    c.bench_function("resolve_once_check_ten", |b| {
        b.iter(|| {
            let set = effective_permissions(black_box(&role_default));
            let mut granted = 0u32;
            for &p in &Permission::ALL[..10] {
                if set.contains(p) {
                    granted += 1;
                }
            }
            granted
        })
    });
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
