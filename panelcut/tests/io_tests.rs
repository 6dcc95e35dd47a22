#[cfg(test)]
mod tests {
    use anyhow::Result;
    use panelcut::io::ext_repr::{ExtJob, ExtPlacedPiece, ExtUnplacedPiece};
    use panelcut::io::{Importer, export};
    use std::time::Instant;
    use test_case::test_case;

    fn parse(json: &str) -> ExtJob {
        serde_json::from_str(json).expect("test job should be valid json")
    }

    const CABINET: &str = r#"{
        "name": "cabinet",
        "sheet": { "width": 2440, "height": 1220 },
        "kerf": 5,
        "edge_trim": 12,
        "parts": [
            { "id": 0, "width": 1000, "height": 600, "quantity": 2 },
            { "id": 1, "width": 300, "height": 200, "rotatable": false },
            { "id": 2, "width": 3000, "height": 100 }
        ]
    }"#;

    #[test]
    fn import_applies_defaults_and_trim() -> Result<()> {
        let job = Importer::new(3).import_job(&parse(CABINET))?;

        assert_eq!(job.name, "cabinet");
        assert_eq!((job.sheet_width, job.sheet_height), (2416, 1196));
        assert_eq!(job.kerf, 5);
        assert_eq!(job.parts.len(), 3);
        assert_eq!(job.parts[0].quantity, 2);
        assert!(job.parts[0].rotatable);
        assert_eq!(job.parts[1].quantity, 1);
        assert!(!job.parts[1].rotatable);
        assert_eq!(job.total_part_qty(), 4);
        assert_eq!(job.part(2).map(|p| p.width), Some(3000));
        Ok(())
    }

    #[test]
    fn missing_kerf_falls_back_to_default() -> Result<()> {
        let ext_job = parse(
            r#"{ "name": "planks", "sheet": { "width": 2000, "height": 300 },
                 "parts": [ { "id": 0, "width": 500, "height": 250 } ] }"#,
        );
        let job = Importer::new(3).import_job(&ext_job)?;
        assert_eq!(job.kerf, 3);
        assert_eq!(job.sheet_width, 2000);
        Ok(())
    }

    #[test_case(r#"{ "name": "x", "sheet": { "width": 0, "height": 100 }, "parts": [] }"#; "zero sheet width")]
    #[test_case(r#"{ "name": "x", "sheet": { "width": 100, "height": 100 }, "edge_trim": 50, "parts": [] }"#; "trim consumes board")]
    #[test_case(r#"{ "name": "x", "sheet": { "width": 100, "height": 100 }, "parts": [ { "id": 0, "width": 0, "height": 10 } ] }"#; "zero part width")]
    #[test_case(r#"{ "name": "x", "sheet": { "width": 100, "height": 100 }, "parts": [ { "id": 0, "width": 10, "height": 10, "quantity": 0 } ] }"#; "zero quantity")]
    #[test_case(r#"{ "name": "x", "sheet": { "width": 100, "height": 100 }, "parts": [ { "id": 4, "width": 10, "height": 10 }, { "id": 4, "width": 20, "height": 20 } ] }"#; "duplicate ids")]
    fn invalid_jobs_are_rejected(json: &str) {
        assert!(Importer::new(0).import_job(&parse(json)).is_err());
    }

    #[test]
    fn large_part_ids_are_kept_or_rejected() {
        let id = u32::MAX as u64 + 7;
        let json = format!(
            r#"{{ "name": "x", "sheet": {{ "width": 100, "height": 100 }}, "parts": [ {{ "id": {id}, "width": 10, "height": 10 }} ] }}"#
        );
        let imported = Importer::new(3).import_job(&parse(&json));

        match usize::try_from(id) {
            Ok(expected) => {
                let job = imported.expect("id fits in usize");
                assert_eq!(job.parts[0].id, expected);
                assert_eq!(job.pack().sheets[0].placed_pieces()[0].part_id, expected);
            }
            Err(_) => assert!(imported.is_err()),
        }
    }

    #[test]
    fn export_mirrors_result() -> Result<()> {
        let job = Importer::new(3).import_job(&parse(CABINET))?;
        let result = job.pack();
        let solution = export(&result, Instant::now());

        assert_eq!(solution.n_sheets, result.n_sheets());
        assert_eq!(solution.sheets.len(), result.n_sheets());
        assert_eq!(solution.total_cuts, result.total_cuts());
        assert_eq!(solution.total_efficiency, result.total_efficiency());
        assert_eq!(
            solution.unplaced,
            vec![ExtUnplacedPiece {
                part_id: 2,
                width: 3000,
                height: 100
            }]
        );

        let first = &solution.sheets[0];
        assert_eq!((first.width, first.height, first.kerf), (2416, 1196, 5));
        assert_eq!(
            first.placed_pieces[0],
            ExtPlacedPiece {
                part_id: 0,
                x: 0,
                y: 0,
                width: 600,
                height: 1000,
                rotated: true
            }
        );
        let n_exported = solution
            .sheets
            .iter()
            .map(|s| s.placed_pieces.len())
            .sum::<usize>();
        assert_eq!(n_exported, 3);

        // the solution serializes to json
        let json = serde_json::to_string(&solution)?;
        assert!(json.contains("\"total_cuts\""));
        Ok(())
    }
}
