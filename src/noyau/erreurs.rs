// src/noyau/erreurs.rs
//
// Erreurs du noyau. Chaque étape renvoie la première erreur rencontrée,
// sans reprise partielle.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalcul {
    /// Caractère hors de l'alphabet reconnu (position en caractères, base 0).
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    Lexicale { caractere: char, position: usize },

    /// Suite de chiffres et de points qui n'est pas un nombre (`1.2.3`, `.`).
    #[error("nombre invalide: \"{texte}\" (position {position})")]
    NombreInvalide { texte: String, position: usize },

    #[error("erreur de syntaxe: {0}")]
    Syntaxe(String),

    #[error("opérande manquant: {0}")]
    Arite(String),

    #[error("hors domaine: {0}")]
    Domaine(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// La pile finale ne contient pas exactement une valeur.
    #[error("expression invalide: {restants} valeur(s) restante(s) au lieu d'une")]
    Structure { restants: usize },
}

/// Famille d'une erreur, sans ses détails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Lex,
    Syntaxe,
    Arite,
    Domaine,
    DivisionParZero,
    Structure,
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        match self {
            Self::Lexicale { .. } | Self::NombreInvalide { .. } => GenreErreur::Lex,
            Self::Syntaxe(_) => GenreErreur::Syntaxe,
            Self::Arite(_) => GenreErreur::Arite,
            Self::Domaine(_) => GenreErreur::Domaine,
            Self::DivisionParZero => GenreErreur::DivisionParZero,
            Self::Structure { .. } => GenreErreur::Structure,
        }
    }
}
