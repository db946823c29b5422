// Binary confusion-matrix report
//
// cargo run --example report
// RUST_LOG=debug cargo run --example report

use binary_metrics::metrics::{print_report, BinaryMetricType, ConfusionMatrix};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let true_labels: Vec<bool> = vec![true, true, false, false, true, false, true, true];
    let predicted_labels: Vec<bool> = vec![true, false, false, true, true, false, true, false];

    println!("Spam filter evaluation");
    println!("======================\n");
    print_report(&true_labels, &predicted_labels)?;

    let confusion_matrix: ConfusionMatrix =
        ConfusionMatrix::from(&true_labels, &predicted_labels)?;
    println!();
    for metric_type in [BinaryMetricType::Precision, BinaryMetricType::Recall] {
        println!(
            "{:?}: {:.4}",
            metric_type,
            confusion_matrix.get_metric(metric_type)?
        );
    }

    println!("\nEmpty input:");
    if let Err(e) = print_report(&[], &[]) {
        println!("  {}", e);
    }

    Ok(())
}
