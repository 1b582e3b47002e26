use datagen_core::{generate_to_vec, GeneratorOptions};

use crate::add_test;
use crate::common::Fixture;
use crate::KB;

fn library_output(size: u64, seed: u32, percent: u32) -> Vec<u8> {
    let options = GeneratorOptions::default()
        .with_size(size)
        .with_seed(seed)
        .with_compressibility(f64::from(percent) / 100.0);
    generate_to_vec(&options).unwrap()
}

// Test default invocation writes 64 KiB to stdout and nothing to stderr
add_test!(default_invocation, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("datagen", &[]).await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(output.stdout_raw.len(), 64 * KB);
    assert!(output.stderr.is_empty());
    assert!(output.stdout_raw == library_output(64 * KB as u64, 0, 50));
});

// Test that the binary writes the same bytes as the library
add_test!(matches_library, async {
    let mut fixture = Fixture::new();

    for percent in [0u32, 30, 90, 100] {
        let p = percent.to_string();
        let output = fixture
            .run_cargo("datagen", &["-g", "300K", "-s", "5", "-P", &p])
            .await;
        assert!(output.status.success(), "{output:?}");
        assert!(
            output.stdout_raw == library_output(300 * KB as u64, 5, percent),
            "P{percent} differs from the library"
        );
    }
});

// Test identical arguments give identical output
add_test!(deterministic_output, async {
    let mut fixture = Fixture::new();

    let args = ["-g", "200K", "-s", "17", "-P", "60"];
    let first = fixture.run_cargo("datagen", &args).await;
    let second = fixture.run_cargo("datagen", &args).await;
    assert!(first.status.success());
    assert!(first == second);
});

// Test that changing the seed changes the data
add_test!(seed_changes_output, async {
    let mut fixture = Fixture::new();

    let a = fixture.run_cargo("datagen", &["-g", "4K", "-s", "1"]).await;
    let b = fixture.run_cargo("datagen", &["-g", "4K", "-s", "2"]).await;
    assert!(a.status.success() && b.status.success());
    assert!(a.stdout_raw != b.stdout_raw);
});

// Test a shorter request is a prefix of a longer one
add_test!(shorter_output_is_prefix, async {
    let mut fixture = Fixture::new();

    let short = fixture.run_cargo("datagen", &["-g", "10000", "-s", "3"]).await;
    let long = fixture.run_cargo("datagen", &["-g", "1M", "-s", "3"]).await;
    assert_eq!(short.stdout_raw.len(), 10_000);
    assert!(long.stdout_raw.starts_with(&short.stdout_raw));
});
