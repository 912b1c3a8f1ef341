//! Worked analysis of a small vehicle dataset: nine numeric characteristics
//! per model, reduced to two principal axes, with the full interpretation
//! tables printed. This is the rendering layer the library itself stays out
//! of; everything below the `analyze` call is formatting.

use interpretable_pca::{analyze, Dataset, PcaConfig};
use ndarray::Array2;

const VARIABLES: [&str; 9] = [
    "power_hp",
    "displacement_cc",
    "top_speed_kmh",
    "length_mm",
    "width_mm",
    "height_mm",
    "weight_kg",
    "co2_g_km",
    "price_eur",
];

// model, power, displacement, top speed, length, width, height, weight, CO2, price
const VEHICLES: [(&str, [f64; 9]); 18] = [
    ("Citadine_S", [68.0, 998.0, 160.0, 3615.0, 1646.0, 1478.0, 940.0, 99.0, 13200.0]),
    ("Citadine_GT", [100.0, 1199.0, 188.0, 3822.0, 1736.0, 1462.0, 1055.0, 112.0, 18900.0]),
    ("Compacte", [130.0, 1498.0, 210.0, 4284.0, 1799.0, 1459.0, 1280.0, 122.0, 26400.0]),
    ("Compacte_D", [115.0, 1597.0, 200.0, 4362.0, 1789.0, 1441.0, 1320.0, 108.0, 27800.0]),
    ("Berline", [184.0, 1991.0, 235.0, 4709.0, 1827.0, 1442.0, 1475.0, 138.0, 43500.0]),
    ("Berline_L", [245.0, 2497.0, 250.0, 4936.0, 1852.0, 1467.0, 1645.0, 162.0, 58200.0]),
    ("Break", [150.0, 1968.0, 218.0, 4778.0, 1832.0, 1466.0, 1505.0, 129.0, 38900.0]),
    ("Coupe", [258.0, 2998.0, 250.0, 4519.0, 1852.0, 1295.0, 1420.0, 172.0, 54700.0]),
    ("Roadster", [184.0, 1998.0, 240.0, 3915.0, 1735.0, 1230.0, 1060.0, 156.0, 41300.0]),
    ("GT_Sport", [450.0, 3982.0, 285.0, 4544.0, 1939.0, 1287.0, 1655.0, 231.0, 118500.0]),
    ("SUV_Urbain", [110.0, 1332.0, 183.0, 4227.0, 1797.0, 1589.0, 1320.0, 126.0, 27900.0]),
    ("SUV_Familial", [190.0, 1995.0, 212.0, 4686.0, 1859.0, 1658.0, 1750.0, 154.0, 49800.0]),
    ("SUV_Luxe", [340.0, 2995.0, 245.0, 4924.0, 1983.0, 1776.0, 2185.0, 209.0, 92600.0]),
    ("Tout_Terrain", [200.0, 2993.0, 190.0, 4882.0, 1894.0, 1848.0, 2250.0, 219.0, 61400.0]),
    ("Monospace", [136.0, 1749.0, 198.0, 4640.0, 1826.0, 1690.0, 1585.0, 139.0, 34600.0]),
    ("Ludospace", [102.0, 1499.0, 172.0, 4403.0, 1848.0, 1844.0, 1455.0, 131.0, 24300.0]),
    ("Utilitaire", [120.0, 1997.0, 165.0, 4959.0, 1956.0, 1894.0, 1845.0, 174.0, 29700.0]),
    ("Limousine", [367.0, 2998.0, 250.0, 5179.0, 1902.0, 1467.0, 1945.0, 192.0, 109300.0]),
];

fn main() -> interpretable_pca::Result<()> {
    let labels: Vec<String> = VEHICLES.iter().map(|(model, _)| model.to_string()).collect();
    let variables: Vec<String> = VARIABLES.iter().map(|v| v.to_string()).collect();
    let mut values = Array2::zeros((VEHICLES.len(), VARIABLES.len()));
    for (row, (_, characteristics)) in VEHICLES.iter().enumerate() {
        for (column, value) in characteristics.iter().enumerate() {
            values[[row, column]] = *value;
        }
    }

    let dataset = Dataset::new(labels, variables, values)?;
    let results = analyze(&dataset, &PcaConfig::default())?;
    let report = results.report();

    println!("=== EIGENVALUES ===");
    print!("{}", report.axes);

    println!();
    println!("=== COMPONENT FORMULAS ===");
    println!("Each axis is a normalized linear combination of the standardized variables:");
    for (axis, column) in results.eigenvectors().columns().into_iter().enumerate() {
        let terms: Vec<String> = results
            .variable_names()
            .iter()
            .zip(column.iter())
            .map(|(name, weight)| format!("{:+.3}*{}", weight, name))
            .collect();
        println!("PC{} = {}", axis + 1, terms.join(" "));
    }

    println!();
    println!("=== VARIABLE CONTRIBUTIONS TO THE AXES (%) ===");
    print!("{}", report.variable_contributions);

    println!();
    println!("=== INDIVIDUAL CONTRIBUTIONS TO THE AXES (%) ===");
    print!("{}", report.individual_contributions);

    println!();
    println!("=== SUMMARY ===");
    let explained = results.explained_variance_ratio();
    println!("PC1 explains {:.2}% of total variance.", explained[0] * 100.0);
    println!("PC2 explains {:.2}% of total variance.", explained[1] * 100.0);

    println!();
    println!("Loadings (variable coordinates on the axes):");
    print!("{}", report.loadings);

    println!();
    println!("Individual scores:");
    print!("{}", report.scores);

    Ok(())
}
