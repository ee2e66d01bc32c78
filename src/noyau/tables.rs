// src/noyau/tables.rs
//
// Tables fixes du noyau : opérateurs, fonctions, constantes.
// Tout est connu à la compilation (match), rien n'est mutable.

use num_traits::Float;

/// Associativité d'un opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Opérateurs binaires `+ - * / ^`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 2,
            Self::Fois | Self::Divise => 3,
            Self::Puissance => 4,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Puissance => Assoc::Droite,
            _ => Assoc::Gauche,
        }
    }
}

/// Fonctions unaires reconnues (toutes d'arité 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Log,
    Ln,
    Abs,
}

impl Fonction {
    /// Les dix noms, dans l'ordre de la table.
    pub const TOUTES: [Fonction; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Abs,
    ];

    pub fn from_nom(nom: &str) -> Option<Self> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Abs => "abs",
        }
    }

    /// Application brute. Le domaine de `sqrt` est vérifié par l'évaluateur.
    /// `log` = base 10, `ln` = base e.
    pub fn applique<F: Float>(self, x: F) -> F {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sqrt => x.sqrt(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Abs => x.abs(),
        }
    }
}

/// Constantes nommées.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn from_nom(nom: &str) -> Option<Self> {
        match nom {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}
