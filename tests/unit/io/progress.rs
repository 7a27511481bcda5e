//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use dunjon::io::configuration::MAX_VISIBLE_MAPS;
    use dunjon::io::progress::ProgressManager;

    // Tests a full start/complete cycle for a small batch
    // Verified by incrementing completion on start
    #[test]
    fn test_progress_cycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.start_map("a");
        assert_eq!(pm.completed(), 0);
        pm.complete_map();
        pm.start_map("b");
        pm.complete_map();

        assert_eq!(pm.completed(), 2);
        pm.finish();
    }

    // Tests batches larger than the visible window
    // Verified by indexing status lines by map number
    #[test]
    fn test_progress_rolling_window() {
        let mut pm = ProgressManager::default();
        let count = MAX_VISIBLE_MAPS * 2 + 1;
        pm.initialize(count);

        for k in 0..count {
            pm.start_map(&format!("seed-{k}"));
            pm.complete_map();
        }

        assert_eq!(pm.completed(), count);
        pm.finish();
    }

    // Tests an empty batch and completing without a started map
    // Verified by unconditionally creating the batch bar
    #[test]
    fn test_progress_empty_batch() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.complete_map();
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }
}
