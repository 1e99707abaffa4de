use catalog::{build_score_histogram, build_type_totals, build_yearly_type_counts, normalize_to_percentages};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).unwrap_or("datasets/titles.csv".to_string());
    let df = catalog::load_titles(&path)?;

    println!("{}", build_yearly_type_counts(&df)?.frame());
    println!("{}", normalize_to_percentages(&build_type_totals(&df)?)?.frame());
    println!("{}", build_score_histogram(&df)?.frame());
    Ok(())
}
