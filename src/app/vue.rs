// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter soumet (quand le champ est focus)
// - Aperçu live : chaque modification de l'entrée est ré-évaluée
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use calculatrice_latex::noyau::tables::Fonction;
use calculatrice_latex::noyau::Mode;
use eframe::egui;

use super::etat::{AppCalc, TEXTE_ERREUR};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice LaTeX");
                ui.add_space(6.0);

                self.ui_historique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");

        if self.historique.is_empty() {
            ui.monospace("(vide)");
            return;
        }

        // Clic sur une ligne => l'expression revient dans l'entrée.
        let mut rappel: Option<usize> = None;
        egui::ScrollArea::vertical()
            .id_salt("historique_scroll")
            .max_height(180.0)
            .show(ui, |ui| {
                for (i, h) in self.historique.iter().enumerate() {
                    let texte = format!("{}  = {}", h.expression, h.resultat);
                    let resp = ui.add(egui::Button::new(egui::RichText::new(texte).monospace()).frame(false));
                    if resp.on_hover_text("Reprendre cette expression").clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappelle(i);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Entrée :");
            let mut latex = self.mode == Mode::Latex;
            if ui.checkbox(&mut latex, "LaTeX").changed() {
                self.set_mode(if latex { Mode::Latex } else { Mode::Ascii });
            }
        });

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(r"Ex: \frac{1}{2}+\sqrt{9}, 2^3^2, sin(pi/4)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if resp.changed() {
            self.actualise_apercu();
        }

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter soumet (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.soumettre();
        }

        // Aperçu
        ui.horizontal(|ui| {
            ui.label("=");
            if self.apercu == TEXTE_ERREUR {
                ui.colored_label(ui.visuals().error_fg_color, &self.apercu)
                    .on_hover_text(&self.erreur);
            } else {
                ui.monospace(&self.apercu);
            }
        });

        ui.add_space(6.0);

        // Actions + précision
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = historique seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface l’historique", Action::ClearHistorique);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=17)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        // Fonctions + constantes
        ui.horizontal_wrapped(|ui| {
            for f in Fonction::TOUTES {
                self.bouton_insert(ui, f.nom(), &format!("{}(", f.nom()));
            }
            ui.separator();
            self.bouton_insert(ui, "π", "pi");
            self.bouton_insert(ui, "e", "e");
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "/", "/");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "*", "*");
                self.bouton_insert(ui, "(", "(");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "-", "-");
                self.bouton_insert(ui, ")", ")");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "^", "^");
                self.bouton_insert(ui, "+", "+");

                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.soumettre();
                }
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d’un coup un nom de fonction suivi de '('.
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        for f in Fonction::TOUTES {
            let pat = format!("{}(", f.nom());
            if self.entree.ends_with(&pat) {
                self.entree.truncate(self.entree.len() - pat.len());
                return;
            }
        }

        // Sinon : un caractère
        self.entree.pop();
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Canonique", "demarche_canonique", &self.demarche.canonique);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                if !self.erreur.is_empty() {
                    Self::champ_demarche(ui, "Erreur", "demarche_erreur", &self.erreur);
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearHistorique => self.clear_historique(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.backspace_entree();
                    self.actualise_apercu();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        self.entree.push_str(to_insert);
        self.actualise_apercu();
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearHistorique,
    ResetTotal,
    Backspace,
}
