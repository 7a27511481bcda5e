//! Tests for command-line parsing and batch output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use dunjon::io::cli::{Cli, MapBatch};
    use dunjon::io::configuration::{DEFAULT_ROW_COUNT, DEFAULT_SEED, DungeonLayout, RoomLayout};
    use dunjon::io::error::DungeonError;
    use std::path::PathBuf;

    // Tests CLI parsing with only the output directory
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["dunjon", "maps"]);

        assert_eq!(cli.output_dir, PathBuf::from("maps"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.rows, DEFAULT_ROW_COUNT);
        assert_eq!(cli.count, 1);
        assert!(!cli.png);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with generation arguments
    // Verified by swapping the layout value parsers
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "dunjon",
            "out",
            "--seed",
            "crypt",
            "--rows",
            "21",
            "--cols",
            "31",
            "--dungeon-layout",
            "round",
            "--room-layout",
            "packed",
            "--min-room",
            "5",
            "--max-room",
            "7",
            "--corridor-layout",
            "90",
            "--remove-deadends",
            "100",
            "--stairs",
            "4",
            "--cell-size",
            "12",
            "--padding",
            "6",
            "--scale",
            "1.5",
            "--count",
            "3",
            "--png",
            "--quiet",
            "--no-skip",
        ]);

        let config = cli.to_config();
        assert_eq!(config.seed, "crypt");
        assert_eq!((config.row_count, config.column_count), (21, 31));
        assert_eq!(config.dungeon_layout, DungeonLayout::Round);
        assert_eq!(config.room_layout, RoomLayout::Packed);
        assert_eq!((config.minimum_room_size, config.maximum_room_size), (5, 7));
        assert_eq!(config.corridor_layout, 90);
        assert_eq!(config.remove_deadends_ratio, 100);
        assert_eq!(config.add_stair_count, 4);
        assert_eq!((config.cell_size, config.map_padding), (12, 6));
        assert!((config.scale - 1.5).abs() < f32::EPSILON);
        assert!(cli.png);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests seed suffixing for batches
    // Verified by suffixing single-map runs too
    #[test]
    fn test_seeds() {
        let single = Cli::parse_from(["dunjon", "out", "--seed", "s"]);
        assert_eq!(single.seeds(), vec!["s".to_string()]);

        let batch = Cli::parse_from(["dunjon", "out", "--seed", "s", "--count", "3"]);
        assert_eq!(batch.seeds(), vec!["s-1", "s-2", "s-3"]);
    }

    // Tests a batch writes one SVG per seed and a PNG on request
    // Verified by skipping the PNG branch
    #[test]
    fn test_batch_writes_outputs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("maps");
        let cli = Cli::parse_from([
            "dunjon".into(),
            out.clone().into_os_string(),
            "--seed".into(),
            "vault".into(),
            "--count".into(),
            "2".into(),
            "--png".into(),
            "--quiet".into(),
        ]);

        let written = MapBatch::new(cli).process().expect("batch succeeds");
        assert_eq!(written, 2);
        for seed in ["vault-1", "vault-2"] {
            assert!(out.join(format!("{seed}.svg")).exists());
            assert!(out.join(format!("{seed}.png")).exists());
        }
        let svg = std::fs::read_to_string(out.join("vault-1.svg")).expect("svg readable");
        assert!(svg.starts_with("<svg"));
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by inverting boolean logic in skip_existing
    #[test]
    fn test_batch_skips_existing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = |extra: &[&str]| {
            let mut args = vec![
                "dunjon".to_string(),
                dir.path().display().to_string(),
                "--quiet".to_string(),
            ];
            args.extend(extra.iter().map(ToString::to_string));
            Cli::parse_from(args)
        };

        assert_eq!(MapBatch::new(args(&[])).process().ok(), Some(1));
        assert_eq!(MapBatch::new(args(&[])).process().ok(), Some(0));
        assert_eq!(MapBatch::new(args(&["--no-skip"])).process().ok(), Some(1));
    }

    // Tests invalid parameters fail before anything is written
    // Verified by checking the output directory was never created
    #[test]
    fn test_batch_rejects_invalid_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("never");
        let cli = Cli::parse_from([
            "dunjon".into(),
            out.clone().into_os_string(),
            "--rows".into(),
            "8".into(),
            "--quiet".into(),
        ]);

        let result = MapBatch::new(cli).process();
        assert!(matches!(result, Err(DungeonError::InvalidParameter { .. })));
        assert!(!out.exists());
    }

    // Tests a regular file is refused as the output directory
    // Verified by pointing the batch at a file inside a temp dir
    #[test]
    fn test_batch_rejects_file_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("taken");
        std::fs::write(&file, "").expect("write file");
        let cli = Cli::parse_from([
            "dunjon".into(),
            file.into_os_string(),
            "--quiet".into(),
        ]);

        let result = MapBatch::new(cli).process();
        assert!(matches!(
            result,
            Err(DungeonError::InvalidParameter {
                parameter: "path",
                ..
            })
        ));
    }
}
