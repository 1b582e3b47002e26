use datagen_core::{generate_to_vec, GeneratorOptions};

use crate::add_test;
use crate::common::Fixture;
use crate::MB;

// Test zero-size requests succeed with empty output
add_test!(zero_size, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("datagen", &["-g", "0"]).await;
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout_raw.is_empty());
});

// Test P0 produces uniform noise covering every byte value
add_test!(incompressible_covers_all_bytes, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("datagen", &["-g", "256K", "-P", "0"]).await;
    assert!(output.status.success());

    let mut seen = [false; 256];
    for &byte in &output.stdout_raw {
        seen[usize::from(byte)] = true;
    }
    assert!(seen.iter().all(|&s| s));
});

// Test P100 is made of a handful of very long runs
add_test!(full_compressibility_long_runs, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("datagen", &["-g", "4M", "-P", "100"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout_raw.len(), 4 * MB);

    let changes = output
        .stdout_raw
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .count();
    assert!(changes < 64, "{changes} byte changes");
});

// Test compressibility above 100 behaves like 100
add_test!(compressibility_is_clamped, async {
    let mut fixture = Fixture::new();

    let full = fixture.run_cargo("datagen", &["-g", "1M", "-P", "100"]).await;
    let over = fixture.run_cargo("datagen", &["-g", "1M", "-P", "250"]).await;
    assert!(over.status.success());
    assert!(full.stdout_raw == over.stdout_raw);
});

// Test the hidden literal flag is clamped and skews the alphabet
add_test!(literal_skew_flag, async {
    let mut fixture = Fixture::new();

    let max = fixture.run_cargo("datagen", &["-g", "64K", "-P", "0", "-L", "100"]).await;
    let over = fixture.run_cargo("datagen", &["-g", "64K", "-P", "0", "-L", "900"]).await;
    assert!(max.status.success() && over.status.success());
    assert!(max.stdout_raw == over.stdout_raw);
    assert!(max.stdout_raw.iter().all(|&b| b == max.stdout_raw[0]));

    let options = GeneratorOptions::default()
        .with_size(64 * 1024)
        .with_compressibility(0.0)
        .with_literal_skew(0.4);
    let partial = fixture.run_cargo("datagen", &["-g", "64K", "-P", "0", "-L", "40"]).await;
    assert!(partial.stdout_raw == generate_to_vec(&options).unwrap());
    assert!(partial.stdout_raw.iter().all(|b| (b'('..=b'}').contains(b)));
});

// Test a reader closing the pipe early ends generation quietly
add_test!(closed_pipe_is_not_an_error, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo_head("datagen", &["-g", "1G", "-s", "4"], 100_000)
        .await;
    assert!(output.status.success(), "{output:?}");
    assert!(output.stderr.is_empty(), "{}", output.stderr);

    let options = GeneratorOptions::default().with_size(100_000).with_seed(4);
    assert!(output.stdout_raw == generate_to_vec(&options).unwrap());
});

// Test large outputs stream to a file with exact length
add_test!(large_output_to_file, async {
    const FILE_NAME: &str = "large.bin";

    let mut fixture = Fixture::new();
    let path = fixture.path(FILE_NAME);

    let output = fixture
        .run_cargo("datagen", &["-g", "16M", "-P", "75", "-o", &path])
        .await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        std::fs::metadata(fixture.root_dir_path().join(FILE_NAME))
            .unwrap()
            .len(),
        16 * MB as u64
    );
});
