//! Tests de propriétés : différentiel + idempotence + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - évaluateur de référence : descente récursive écrite directement
//!   depuis la grammaire (+ - * / et parenthèses), indépendant du shunting-yard

use std::time::{Duration, Instant};

use approx::assert_relative_eq;

use super::erreurs::ErreurCalcul;
use super::latex::to_canonical;
use super::{evaluate, evaluate_latex};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence : descente récursive ------------------------ */

/// expr   := terme (('+' | '-') terme)*
/// terme  := facteur (('*' | '/') facteur)*
/// facteur:= nombre | '(' expr ')'
///
/// `None` = division par zéro rencontrée.
struct Reference<'a> {
    src: &'a [u8],
    i: usize,
}

impl<'a> Reference<'a> {
    fn evalue(s: &'a str) -> Option<f64> {
        let mut r = Reference {
            src: s.as_bytes(),
            i: 0,
        };
        let v = r.expr()?;
        assert_eq!(r.i, r.src.len(), "référence: reste non lu dans {s:?}");
        Some(v)
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.i).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut acc = self.terme()?;
        while let Some(c @ (b'+' | b'-')) = self.peek() {
            self.i += 1;
            let d = self.terme()?;
            acc = if c == b'+' { acc + d } else { acc - d };
        }
        Some(acc)
    }

    fn terme(&mut self) -> Option<f64> {
        let mut acc = self.facteur()?;
        while let Some(c @ (b'*' | b'/')) = self.peek() {
            self.i += 1;
            let d = self.facteur()?;
            if c == b'*' {
                acc *= d;
            } else {
                if d == 0.0 {
                    return None;
                }
                acc /= d;
            }
        }
        Some(acc)
    }

    fn facteur(&mut self) -> Option<f64> {
        if self.peek() == Some(b'(') {
            self.i += 1;
            let v = self.expr()?;
            assert_eq!(self.peek(), Some(b')'), "référence: ')' attendue");
            self.i += 1;
            return Some(v);
        }
        let start = self.i;
        while matches!(self.peek(), Some(b'0'..=b'9' | b'.')) {
            self.i += 1;
        }
        let txt = std::str::from_utf8(&self.src[start..self.i]).expect("ascii");
        Some(txt.parse::<f64>().expect("nombre de référence"))
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(20), rng.pick(100)),
        2 => format!("{}", 1 + rng.pick(999)),
        _ => format!(".{}", 1 + rng.pick(9)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("{a}+{b}"),
        2 => format!("{a}-{b}"),
        3 => format!("{a}*{b}"),
        4 => format!("{a}/{b}"),
        5 => format!("({a})"),
        _ => format!("({a}-{b})*{b}"),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn differentiel_contre_descente_recursive() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut vus_ok = 0usize;
    let mut vus_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match (Reference::evalue(&expr), evaluate(&expr)) {
            (Some(attendu), Ok(v)) => {
                assert_relative_eq!(v, attendu, epsilon = 1e-9, max_relative = 1e-9);
                vus_ok += 1;
            }
            (None, Err(ErreurCalcul::DivisionParZero)) => vus_div0 += 1,
            (r, e) => panic!("divergence: expr={expr:?} référence={r:?} moteur={e:?}"),
        }
    }

    assert!(vus_ok > 100, "trop peu de succès: {vus_ok}");
    assert!(vus_div0 > 0, "aucune division par zéro vue: générateur trop “sage”");
}

#[test]
fn puissance_associative_droite_generale() {
    let mut rng = Rng::new(0xBADC0DE_u64);
    for _ in 0..100 {
        let a = 1 + rng.pick(4);
        let b = rng.pick(3);
        let c = rng.pick(3);
        let v = evaluate(&format!("{a}^{b}^{c}")).unwrap();
        let attendu = f64::from(a).powf(f64::from(b).powf(f64::from(c)));
        assert_eq!(v, attendu, "{a}^{b}^{c}");
    }
}

#[test]
fn idempotence_du_pretraitement() {
    const MORCEAUX: [&str; 14] = [
        r"\frac{1}{2}",
        r"\sqrt{9}",
        r"\sin{x}",
        r"\ln 2",
        r"\left(",
        r"\right)",
        r"\pi",
        r"\cdot",
        r"\frac{\frac{1}{2}}{3}",
        r"+",
        r"3",
        r"{",
        r"\alpha",
        r" ",
    ];
    let mut rng = Rng::new(0x5EED_u64);
    for _ in 0..200 {
        let n = 1 + rng.pick(6);
        let entree: String = (0..n)
            .map(|_| MORCEAUX[rng.pick(MORCEAUX.len() as u32) as usize])
            .collect();
        let une = to_canonical(&entree);
        assert!(!une.contains('\\'), "commande restante: {une:?}");
        assert_eq!(to_canonical(&une), une, "entrée={entree:?}");
    }
}

#[test]
fn somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let expr = somme_balancee("0.5", 800);
    assert_eq!(evaluate(&expr).unwrap(), 400.0);
    assert_eq!(evaluate_latex(&expr).unwrap(), 400.0);
    budget(t0, Duration::from_millis(200));
}

#[test]
fn imbrication_profonde_sans_recursion() {
    let n = 20_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&expr).unwrap(), 1.0);

    let expr = format!("{}1{}", "sqrt(".repeat(50), ")".repeat(50));
    assert_eq!(evaluate(&expr).unwrap(), 1.0);
}

#[test]
fn appels_concurrents_independants() {
    let fils: Vec<_> = (0..8)
        .map(|k| {
            std::thread::spawn(move || {
                let expr = format!("{k}*(2+3)-{k}");
                evaluate(&expr).map(|v| (k, v))
            })
        })
        .collect();
    for f in fils {
        let (k, v) = f.join().expect("fil").expect("évaluation");
        assert_eq!(v, f64::from(k) * 4.0);
    }
}
