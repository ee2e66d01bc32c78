//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, aperçu, historique, démarche)
//! et offrir des opérations simples (C/CLR/AC, soumission) sans logique d’affichage.
//!
//! Contrats :
//! - Le parsing et le calcul restent dans le noyau ; ici on ne fait que l'appeler.
//! - Politique d'entrée (fermeture auto des parenthèses) : ici, pas dans le noyau.
//! - Défense en profondeur : bornes sur digits et sur la taille de l'historique.

use calculatrice_latex::noyau::format::format_resultat;
use calculatrice_latex::noyau::{evaluer_avec_demarche, Demarche, Mode};
use log::{debug, info};

/// Précision d'affichage par défaut (décimales).
const DIGITS_DEFAUT: usize = 10;

/// Garde-fou : au-delà, un f64 n'a plus de chiffres significatifs à montrer.
const DIGITS_MAX: usize = 17;

/// Nombre maximal d'entrées conservées dans l'historique.
pub const HISTORIQUE_MAX: usize = 100;

/// Marqueur générique d'échec (aperçu + historique).
pub const TEXTE_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub mode: Mode,

    // --- sorties ---
    pub apercu: String, // évaluation “live” de l'entrée courante
    pub erreur: String, // détail de la dernière erreur (si parsing/éval échoue)

    // --- historique : plus récent en tête ---
    pub historique: Vec<EntreeHistorique>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize, // précision d'affichage

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            mode: Mode::default(),
            apercu: String::new(),
            erreur: String::new(),
            historique: Vec::new(),
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

/// Ajoute les `)` manquantes en fin d'entrée (jamais de retrait).
pub fn equilibre_parentheses(expr: &str) -> String {
    let ouvertes = expr.matches('(').count();
    let fermees = expr.matches(')').count();
    let mut out = expr.to_string();
    for _ in fermees..ouvertes {
        out.push(')');
    }
    out
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + aperçu + historique + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (et donc son aperçu).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.apercu.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer l'historique (sans toucher à l’entrée).
    pub fn clear_historique(&mut self) {
        self.historique.clear();
        self.focus_entree = true;
    }

    fn clear_resultats(&mut self) {
        self.apercu.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// Garde-fou : limite digits, puis ré-affiche l'aperçu.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.actualise_apercu();
        self.focus_entree = true;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.actualise_apercu();
        self.focus_entree = true;
    }

    /// Rappelle une expression de l'historique dans l'entrée.
    pub fn rappelle(&mut self, index: usize) {
        if let Some(h) = self.historique.get(index) {
            self.entree = h.expression.clone();
            self.actualise_apercu();
        }
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Aperçu “live” : ré-évalue l'entrée courante telle quelle.
    /// Entrée vide => aperçu vide (pas d'erreur affichée).
    pub fn actualise_apercu(&mut self) {
        if self.entree.trim().is_empty() {
            self.clear_resultats();
            return;
        }
        let entree = self.entree.clone();
        self.apercu = match self.evalue(&entree) {
            Some(v) => v,
            None => TEXTE_ERREUR.to_string(),
        };
    }

    /// Entrée (ou “=”) : ferme les parenthèses, évalue, pousse en tête d'historique,
    /// puis vide l'entrée. Entrée vide => rien.
    pub fn soumettre(&mut self) {
        if self.entree.trim().is_empty() {
            return;
        }

        let expression = equilibre_parentheses(self.entree.trim());
        let resultat = self
            .evalue(&expression)
            .unwrap_or_else(|| TEXTE_ERREUR.to_string());
        info!("{expression} = {resultat}");

        self.historique.insert(
            0,
            EntreeHistorique {
                expression,
                resultat,
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);

        self.entree.clear();
        self.apercu.clear();
        self.focus_entree = true;
    }

    /// Évalue via le noyau ; dépose démarche/erreur ; renvoie le texte affiché.
    fn evalue(&mut self, expression: &str) -> Option<String> {
        match evaluer_avec_demarche(expression, self.mode) {
            Ok((v, d)) => {
                self.erreur.clear();
                self.demarche = d;
                Some(format_resultat(v, self.digits))
            }
            Err(e) => {
                debug!("échec {expression:?}: {e}");
                self.erreur = e.to_string();
                self.demarche = Demarche::default();
                None
            }
        }
    }
}
