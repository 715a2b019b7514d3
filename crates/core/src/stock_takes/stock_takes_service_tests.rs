#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::stock_takes::{StockTake, StockTakeLine, StockTakeService};
    use crate::valuation::{
        EvaluationRequest, EvaluationSnapshot, SnapshotRepositoryTrait, ValuationServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock ValuationService ---

    struct MockValuationService;

    impl ValuationServiceTrait for MockValuationService {
        fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationSnapshot> {
            let evaluation_date = request.cutoff_date.date_naive();
            Ok(EvaluationSnapshot {
                id: EvaluationSnapshot::storage_id(
                    &request.product_id,
                    &request.location_id,
                    request.lot_id.as_deref(),
                    evaluation_date,
                ),
                product_id: request.product_id.clone(),
                location_id: request.location_id.clone(),
                lot_id: request.lot_id.clone(),
                company_id: request.company_id.clone(),
                evaluation_date,
                average_cost: dec!(6),
                average_purchase_cost: dec!(6),
                fifo_cost: dec!(7),
                fifo_purchase_cost: dec!(7),
                lifo_cost: dec!(5),
                lifo_purchase_cost: dec!(5),
                list_price: dec!(12),
                standard_cost: dec!(8),
                product_qty: request.product_qty,
                name: String::new(),
                stock_take_id: None,
                stock_take_line_id: None,
                calculated_at: Utc::now().naive_utc(),
            })
        }
    }

    /// Valuation service that fails every request, simulating e.g. a
    /// product missing from the catalog.
    struct FailingValuationService;

    impl ValuationServiceTrait for FailingValuationService {
        fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationSnapshot> {
            Err(crate::errors::Error::Repository(format!(
                "Product not found: {}",
                request.product_id
            )))
        }
    }

    // --- Mock SnapshotRepository ---

    #[derive(Default)]
    struct MockSnapshotRepository {
        saved: Mutex<Vec<EvaluationSnapshot>>,
        deleted_for: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SnapshotRepositoryTrait for MockSnapshotRepository {
        async fn save_snapshots(&self, snapshots: &[EvaluationSnapshot]) -> Result<()> {
            self.saved.lock().unwrap().extend_from_slice(snapshots);
            Ok(())
        }

        async fn delete_snapshots_for_stock_take(&self, stock_take_id: &str) -> Result<()> {
            self.deleted_for
                .lock()
                .unwrap()
                .push(stock_take_id.to_string());
            // Deletion replaces any snapshots from a prior run.
            self.saved
                .lock()
                .unwrap()
                .retain(|s| s.stock_take_id.as_deref() != Some(stock_take_id));
            Ok(())
        }

        fn snapshots_for_stock_take(&self, stock_take_id: &str) -> Result<Vec<EvaluationSnapshot>> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.stock_take_id.as_deref() == Some(stock_take_id))
                .cloned()
                .collect())
        }
    }

    fn stock_take() -> StockTake {
        StockTake {
            id: "st-1".to_string(),
            company_id: "company-1".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 31, 18, 0, 0).unwrap(),
            lines: vec![
                StockTakeLine {
                    id: "line-1".to_string(),
                    product_id: "prod-1".to_string(),
                    lot_id: None,
                    location_id: "loc-main".to_string(),
                    product_qty: dec!(15),
                },
                StockTakeLine {
                    id: "line-2".to_string(),
                    product_id: "prod-2".to_string(),
                    lot_id: Some("lot-3".to_string()),
                    location_id: "loc-main".to_string(),
                    product_qty: dec!(4),
                },
            ],
        }
    }

    #[tokio::test]
    async fn run_evaluations_persists_one_snapshot_per_line() {
        let repository = Arc::new(MockSnapshotRepository::default());
        let service = StockTakeService::new(Arc::new(MockValuationService), repository.clone());

        let snapshots = service.run_evaluations(&stock_take()).await.unwrap();
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots
            .iter()
            .all(|s| s.stock_take_id.as_deref() == Some("st-1")));
        assert_eq!(snapshots[0].stock_take_line_id.as_deref(), Some("line-1"));
        assert_eq!(snapshots[1].stock_take_line_id.as_deref(), Some("line-2"));

        assert_eq!(service.evaluation_count("st-1").unwrap(), 2);
    }

    #[tokio::test]
    async fn rerunning_replaces_previous_snapshots() {
        let repository = Arc::new(MockSnapshotRepository::default());
        let service = StockTakeService::new(Arc::new(MockValuationService), repository.clone());
        let stock_take = stock_take();

        service.run_evaluations(&stock_take).await.unwrap();
        service.run_evaluations(&stock_take).await.unwrap();

        // Prior snapshots were deleted before the second run saved.
        assert_eq!(repository.deleted_for.lock().unwrap().len(), 2);
        assert_eq!(service.evaluation_count("st-1").unwrap(), 2);
    }

    #[tokio::test]
    async fn failed_rerun_keeps_previous_snapshots() {
        let repository = Arc::new(MockSnapshotRepository::default());
        let stock_take = stock_take();

        let service = StockTakeService::new(Arc::new(MockValuationService), repository.clone());
        service.run_evaluations(&stock_take).await.unwrap();
        assert_eq!(service.evaluation_count("st-1").unwrap(), 2);

        // A rerun whose valuation fails must not touch the stored snapshots.
        let failing =
            StockTakeService::new(Arc::new(FailingValuationService), repository.clone());
        assert!(failing.run_evaluations(&stock_take).await.is_err());
        // Only the first, successful run ever reached the delete.
        assert_eq!(repository.deleted_for.lock().unwrap().len(), 1);
        assert_eq!(failing.evaluation_count("st-1").unwrap(), 2);
    }

    #[tokio::test]
    async fn lines_carry_the_stock_take_company_and_cutoff() {
        let repository = Arc::new(MockSnapshotRepository::default());
        let service = StockTakeService::new(Arc::new(MockValuationService), repository);

        let snapshots = service.run_evaluations(&stock_take()).await.unwrap();
        assert!(snapshots.iter().all(|s| s.company_id == "company-1"));
        assert!(snapshots
            .iter()
            .all(|s| s.evaluation_date.to_string() == "2024-03-31"));
        assert_eq!(snapshots[1].product_qty, dec!(4));
        assert_ne!(snapshots[0].average_cost, Decimal::ZERO);
    }
}
