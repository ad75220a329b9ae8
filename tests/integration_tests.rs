use gmd_rater::parser::parse_records;
use gmd_rater::pipeline;

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/pesagens.csv");
    let records = parse_records(bytes).expect("Failed to parse export");
    let summaries = pipeline::run(&records).expect("Failed to process records");

    // SOLITO has one weighing and TICO has no parseable dates; everyone else
    // qualifies, in first-occurrence order.
    let names: Vec<&str> = summaries.iter().map(|s| s.animal.as_str()).collect();
    assert_eq!(names, ["BESS", "MIMOSA", "UNKNOWN"]);

    let bess = &summaries[0];
    assert_eq!(bess.ganho_diario, 2.0);
    assert_eq!(bess.ganho_total, 20.0);
    assert_eq!(bess.periodo_dias, 10);
    assert_eq!(bess.total_pesagens, 2);
    assert_eq!(bess.sexo, "F");
    assert_eq!(bess.local, "Pasto Norte");
    assert_eq!(bess.idade_meses, 12.0);

    // Comma-decimal weight: 230,5 - 200 over 31 days.
    let mimosa = &summaries[1];
    assert_eq!(mimosa.peso_final, 230.5);
    assert_eq!(mimosa.ganho_diario, 0.9839);
    assert_eq!(mimosa.periodo_dias, 31);

    // Spreadsheet serial dates: 44927 is 2023-01-01, 44937 ten days later.
    let unknown = &summaries[2];
    assert_eq!(unknown.periodo_dias, 10);
    assert_eq!(unknown.ganho_diario, 0.5);

    for summary in &summaries {
        assert_eq!(summary.ganho_total, summary.peso_final - summary.peso_inicial);
        assert!(summary.total_pesagens >= 2);
    }
}
