//! Plain-text result report

/// Render seeding indices and final centroids
///
/// The first line lists the k-means++ source indices; each following line
/// is one centroid with every coordinate printed to four decimals.
pub fn format_report(indices: &[usize], centroids: &[Vec<f64>]) -> String {
    let mut out = String::new();

    let index_line: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    out.push_str(&index_line.join(","));
    out.push('\n');

    for centroid in centroids {
        let line: Vec<String> = centroid.iter().map(|v| format!("{v:.4}")).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}
