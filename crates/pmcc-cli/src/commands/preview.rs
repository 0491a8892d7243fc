use std::error::Error;

use pmcc_core::COLUMN_LABELS;

use super::PopulationArgs;

pub fn run(rows: usize, population: &PopulationArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let population = population.build()?;
    let preview = population.preview(rows);

    if json {
        let out = serde_json::json!({
            "columns": COLUMN_LABELS,
            "rows": preview,
            "total_rows": population.len(),
            "config": population.config(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "Generated population ({} of {} rows):",
        preview.len(),
        population.len()
    );
    println!("{:>5}  {:>10}  {:>10}", "row", COLUMN_LABELS[0], COLUMN_LABELS[1]);
    for (i, [v1, v2]) in preview.iter().enumerate() {
        println!("{i:>5}  {v1:>10.4}  {v2:>10.4}");
    }
    Ok(())
}
