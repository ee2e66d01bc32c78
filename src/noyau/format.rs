// src/noyau/format.rs
//
// Affichage d'un résultat flottant : `digits` décimales au plus,
// zéros de queue retirés, notation scientifique aux extrêmes.

/// Au-delà (ou en deçà), on passe en notation scientifique.
const SCI_MAX: f64 = 1e16;
const SCI_MIN: f64 = 1e-6;

fn retire_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Ex: (14.0, 10) -> "14" ; (0.1+0.2, 10) -> "0.3" ; (2.5e20, 3) -> "2.5e20"
pub fn format_resultat(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let a = x.abs();
    let s = if a != 0.0 && !(SCI_MIN..SCI_MAX).contains(&a) {
        let brut = format!("{x:.digits$e}");
        match brut.split_once('e') {
            Some((mantisse, exposant)) => format!("{}e{exposant}", retire_zeros(mantisse)),
            None => brut,
        }
    } else {
        retire_zeros(&format!("{x:.digits$}")).to_string()
    };

    // "-0" (arrondi d'un petit négatif, ou -0.0) => "0"
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
