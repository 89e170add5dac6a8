// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Performance Benchmarks for the Backup Codec
//!
//! Run with: cargo bench -p copeplan-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use copeplan_core::backup::{export_plan_with_version, restore_plan, FormatVersion};
use copeplan_core::{PlanPayload, SelectedSkill, SupportiveAdult};

fn sample_plan() -> PlanPayload {
    let mut plan = PlanPayload::new("Sam").with_default_crisis_resources();
    for i in 0..10 {
        plan.add_skill(SelectedSkill::new(&format!("skill-{}", i)).with_fill_in("a short note"))
            .unwrap();
    }
    plan.add_supportive_adult(SupportiveAdult::new("Ms. Lopez", "555-0100").primary())
        .unwrap();
    plan
}

// =============================================================================
// SYMMETRIC ENCRYPTION BENCHMARKS
// =============================================================================

fn bench_symmetric_encryption(c: &mut Criterion) {
    use copeplan_core::crypto::{open, seal, Cipher, SymmetricKey};

    let key = SymmetricKey::generate().unwrap();
    let plan_json = serde_json::to_vec(&sample_plan()).unwrap();

    let mut group = c.benchmark_group("symmetric_encryption");
    group.throughput(Throughput::Bytes(plan_json.len() as u64));

    for cipher in [Cipher::Aes256Gcm, Cipher::XChaCha20Poly1305] {
        let nonce = cipher.generate_nonce().unwrap();
        group.bench_function(format!("seal_plan_{}", cipher.name()), |b| {
            b.iter(|| seal(cipher, black_box(&key), &nonce, b"aad", black_box(&plan_json)))
        });

        let sealed = seal(cipher, &key, &nonce, b"aad", &plan_json).unwrap();
        group.bench_function(format!("open_plan_{}", cipher.name()), |b| {
            b.iter(|| open(cipher, black_box(&key), &nonce, b"aad", black_box(&sealed)))
        });
    }

    group.finish();
}

// =============================================================================
// PASSWORD KDF BENCHMARKS
// =============================================================================

fn bench_password_kdf(c: &mut Criterion) {
    let salt = [7u8; 16];

    let mut group = c.benchmark_group("password_kdf");
    group.sample_size(10);

    for version in FormatVersion::SUPPORTED {
        group.bench_function(format!("derive_v{}", version.number()), |b| {
            b.iter(|| version.derive_key(black_box("correct-horse-battery"), &salt))
        });
    }

    group.finish();
}

// =============================================================================
// CODEC BENCHMARKS
// =============================================================================

fn bench_codec(c: &mut Criterion) {
    let plan = sample_plan();

    let mut group = c.benchmark_group("backup_codec");
    group.sample_size(10);

    for version in FormatVersion::SUPPORTED {
        group.bench_function(format!("export_v{}", version.number()), |b| {
            b.iter(|| export_plan_with_version(black_box(&plan), "correct-horse-battery", version))
        });

        let backup = export_plan_with_version(&plan, "correct-horse-battery", version).unwrap();
        group.bench_function(format!("restore_v{}", version.number()), |b| {
            b.iter(|| restore_plan(black_box(&backup), "correct-horse-battery"))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_symmetric_encryption,
    bench_password_kdf,
    bench_codec
);
criterion_main!(benches);
