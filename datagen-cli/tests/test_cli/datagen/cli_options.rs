use crate::add_test;
use crate::common::Fixture;
use crate::{KB, MB};

// Test size suffixes and positional size
add_test!(size_arguments, async {
    let mut fixture = Fixture::new();

    let cases: [(&[&str], usize); 6] = [
        (&["-g", "1000"], 1000),
        (&["-g", "1KB"], KB),
        (&["-g3K"], 3 * KB),
        (&["--size", "1M"], MB),
        (&["--size=2k"], 2 * KB),
        (&["5K"], 5 * KB),
    ];

    for (args, expected) in cases {
        let output = fixture.run_cargo("datagen", args).await;
        assert!(output.status.success(), "{args:?}: {output:?}");
        assert_eq!(output.stdout_raw.len(), expected, "{args:?}");
    }
});

// Test writing to a file instead of stdout
add_test!(output_to_file, async {
    const FILE_NAME: &str = "data.bin";

    let mut fixture = Fixture::new();
    let path = fixture.path(FILE_NAME);

    let stdout = fixture.run_cargo("datagen", &["-g", "100K", "-s", "8"]).await;
    let output = fixture
        .run_cargo("datagen", &["-g", "100K", "-s", "8", "-o", &path])
        .await;
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout_raw.is_empty());
    assert!(fixture.read(FILE_NAME) == stdout.stdout_raw);
});

// Test existing files are not overwritten without --force
add_test!(output_exists_without_force, async {
    const FILE_NAME: &str = "existing.bin";

    let mut fixture = Fixture::with_file(FILE_NAME, b"original");
    let path = fixture.path(FILE_NAME);

    let output = fixture.run_cargo("datagen", &["-o", &path]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.starts_with("datagen: "), "{}", output.stderr);
    assert!(output.stderr.contains("already exists"));
    assert_eq!(fixture.read(FILE_NAME), b"original");

    let output = fixture.run_cargo("datagen", &["-f", "-o", &path]).await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(fixture.read(FILE_NAME).len(), 64 * KB);
});

// Test -qq suppresses error messages but keeps the exit status
add_test!(quiet_twice_suppresses_errors, async {
    const FILE_NAME: &str = "existing.bin";

    let mut fixture = Fixture::with_file(FILE_NAME, b"original");
    let path = fixture.path(FILE_NAME);

    let output = fixture.run_cargo("datagen", &["-qq", "-o", &path]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty(), "{}", output.stderr);
});

// Test missing directories are reported
add_test!(output_in_missing_directory, async {
    let mut fixture = Fixture::new();
    let path = fixture.path("missing/data.bin");

    let output = fixture.run_cargo("datagen", &["-o", &path]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("missing"));
    assert!(!fixture.file_exists("missing"));
});

// Test verbose mode reports parameters on stderr only
add_test!(verbose_reports_parameters, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("datagen", &["-v", "-g", "8K", "-s", "12", "-P", "30"])
        .await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(output.stdout_raw.len(), 8 * KB);
    assert!(output.stderr.contains("Seed = 12"), "{}", output.stderr);
    assert!(output.stderr.contains("Compressibility : 30%"));
    assert!(output.stderr.contains("Generated 8.0 KiB"));

    // The default compressibility is not repeated back.
    let output = fixture.run_cargo("datagen", &["-v", "-g", "8K"]).await;
    assert!(output.stderr.contains("Seed = 0"));
    assert!(!output.stderr.contains("Compressibility"));
});

// Test help and version output
add_test!(help_and_version, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("datagen", &["--help"]).await;
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout_raw);
    assert!(help.contains("--compressibility"));
    assert!(help.contains("--seed"));

    let output = fixture.run_cargo("datagen", &["-V"]).await;
    assert!(output.status.success());
    let version = String::from_utf8_lossy(&output.stdout_raw);
    assert!(version.contains(env!("CARGO_PKG_VERSION")));
});

// Test invalid arguments are rejected before any output
add_test!(invalid_arguments, async {
    let mut fixture = Fixture::new();

    let cases: [&[&str]; 5] = [
        &["-g", "12Q"],
        &["-g", "1.5M"],
        &["-s", "4294967296"],
        &["-P", "half"],
        &["--bogus"],
    ];

    for args in cases {
        let output = fixture.run_cargo("datagen", args).await;
        assert!(!output.status.success(), "{args:?} accepted");
        assert!(output.stdout_raw.is_empty());
        assert!(!output.stderr.is_empty());
    }
});
