use std::collections::HashMap;

use cart_core::{view::RowView, CartController, CartSettings, CartView, LoadError};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::domain::LineItemId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::media::PreviewImage;

const THUMBNAIL_SIZE: f32 = 48.0;
const REMOVE_PROMPT: &str = "Are you sure you want to remove this item from your cart?";

enum ThumbnailState {
    Loading,
    Ready {
        image: PreviewImage,
        texture: Option<TextureHandle>,
    },
    Failed,
}

pub struct CartApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    cart: CartController,
    /// Raw quantity field text per row; reset whenever the rows are rebuilt.
    quantity_drafts: HashMap<LineItemId, String>,
    drafts_generation: u64,
    thumbnails: HashMap<LineItemId, ThumbnailState>,

    title: String,
    status_banner: Option<String>,
}

impl CartApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &CartSettings,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            cart: CartController::new(settings.price_prefix.clone()),
            quantity_drafts: HashMap::new(),
            drafts_generation: 0,
            thumbnails: HashMap::new(),
            title: settings.window_title.clone(),
            status_banner: None,
        };
        app.start_load();
        app
    }

    fn start_load(&mut self) {
        self.cart.begin_load();
        if !dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadCart,
            &mut self.status_banner,
        ) {
            self.cart.finish_load(Err(LoadError::Unavailable(
                "cart load could not be queued".to_string(),
            )));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CartLoaded(result) => self.cart.finish_load(result),
                UiEvent::ThumbnailLoaded { item_id, .. }
                | UiEvent::ThumbnailFailed { item_id, .. }
                    if self.cart.store().get(item_id).is_none() =>
                {
                    tracing::debug!(item = %item_id, "dropping thumbnail for removed item");
                }
                UiEvent::ThumbnailLoaded { item_id, image } => {
                    self.thumbnails.insert(
                        item_id,
                        ThumbnailState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::ThumbnailFailed { item_id, .. } => {
                    self.thumbnails.insert(item_id, ThumbnailState::Failed);
                }
                UiEvent::BackendUnavailable(message) => {
                    if self.cart.is_loading() {
                        self.cart
                            .finish_load(Err(LoadError::Unavailable(message.clone())));
                    }
                    self.status_banner = Some(message);
                }
            }
        }
    }

    fn sync_row_state(&mut self, view: &CartView) {
        if view.generation == self.drafts_generation {
            return;
        }
        self.drafts_generation = view.generation;
        self.quantity_drafts.clear();
        self.thumbnails
            .retain(|id, _| view.rows.iter().any(|row| row.id == *id));
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("cart_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(&self.title);
            if let Some(message) = self.status_banner.clone() {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(111, 53, 53))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(&message).color(egui::Color32::WHITE));
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
            }
            ui.add_space(6.0);
        });
    }

    fn show_totals_panel(&mut self, ctx: &egui::Context, view: &CartView, blocked: bool) {
        egui::TopBottomPanel::bottom("cart_totals").show(ctx, |ui| {
            ui.add_space(8.0);
            egui::Grid::new("cart_totals_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Subtotal");
                    ui.label(&view.subtotal_text);
                    ui.end_row();
                    ui.strong("Total");
                    ui.strong(&view.total_text);
                    ui.end_row();
                });
            ui.add_space(6.0);
            ui.add_enabled_ui(!blocked && !view.loading, |ui| {
                if ui.button("Check Out").clicked() {
                    self.cart.checkout();
                }
            });
            ui.add_space(8.0);
        });
    }

    fn show_items_panel(&mut self, ctx: &egui::Context, view: &CartView, blocked: bool) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if view.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading cart…");
                });
                return;
            }
            if view.rows.is_empty() {
                ui.weak("Your cart is empty.");
                return;
            }

            let mut edits = Vec::new();
            let mut remove_clicked = None;
            ui.add_enabled_ui(!blocked, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("cart_items")
                        .num_columns(5)
                        .striped(true)
                        .spacing([18.0, 10.0])
                        .show(ui, |ui| {
                            ui.strong("Product");
                            ui.strong("Price");
                            ui.strong("Quantity");
                            ui.strong("Subtotal");
                            ui.label("");
                            ui.end_row();

                            for row in &view.rows {
                                ui.horizontal(|ui| {
                                    self.show_thumbnail(ui, row);
                                    ui.label(&row.title);
                                });
                                ui.label(&row.unit_price_text);

                                let draft = self
                                    .quantity_drafts
                                    .entry(row.id)
                                    .or_insert_with(|| row.quantity.to_string());
                                let response = ui.add(
                                    egui::TextEdit::singleline(draft)
                                        .id_salt(("quantity", row.id.0))
                                        .desired_width(56.0),
                                );
                                if response.changed() {
                                    edits.push(row.id);
                                }

                                ui.label(&row.subtotal_text);
                                if ui.button("🗑").on_hover_text("Remove item").clicked() {
                                    remove_clicked = Some(row.id);
                                }
                                ui.end_row();
                            }
                        });
                });
            });

            for id in edits {
                self.commit_quantity_draft(id);
            }
            if let Some(id) = remove_clicked {
                self.cart.request_removal(id);
            }
        });
    }

    /// Applies the row's quantity field text to the cart.
    fn commit_quantity_draft(&mut self, id: LineItemId) {
        let Some(raw) = self.quantity_drafts.get(&id).cloned() else {
            return;
        };
        match self.cart.edit_quantity(id, &raw) {
            Ok(Some(row)) => {
                tracing::debug!(item = %id, quantity = row.quantity, "quantity committed");
            }
            Ok(None) => {
                self.quantity_drafts.remove(&id);
            }
            Err(err) => {
                tracing::debug!(item = %id, "quantity draft kept uncommitted: {err}");
            }
        }
    }

    fn show_thumbnail(&mut self, ui: &mut egui::Ui, row: &RowView) {
        let size = egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
        if row.image_url.is_empty() {
            ui.add_sized(size, egui::Label::new("🖼"));
            return;
        }

        let state = self.thumbnails.entry(row.id).or_insert_with(|| {
            let queued = dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchThumbnail {
                    item_id: row.id,
                    url: row.image_url.clone(),
                },
                &mut self.status_banner,
            );
            if queued {
                ThumbnailState::Loading
            } else {
                ThumbnailState::Failed
            }
        });

        match state {
            ThumbnailState::Loading => {
                ui.add_sized(size, egui::Spinner::new());
            }
            ThumbnailState::Failed => {
                ui.add_sized(size, egui::Label::new("🖼"))
                    .on_hover_text(&row.title);
            }
            ThumbnailState::Ready { image, texture } => {
                let texture = texture.get_or_insert_with(|| {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    ui.ctx().load_texture(
                        format!("cart-thumbnail:{}", row.id),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    )
                });
                ui.add(egui::Image::new(&*texture).max_size(size))
                    .on_hover_text(&row.title);
            }
        }
    }

    fn show_removal_dialog(&mut self, ctx: &egui::Context, open: bool) {
        if !open {
            return;
        }

        let mut confirm = false;
        let mut cancel = false;
        egui::Window::new("Remove item")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(REMOVE_PROMPT);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Remove").clicked() {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if confirm {
            self.cart.confirm_removal();
        } else if cancel {
            self.cart.cancel_removal();
        }
    }

    fn show_notice_dialog(&mut self, ctx: &egui::Context, notice: Option<&str>) {
        let Some(message) = notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.cart.dismiss_notice();
        }
    }
}

impl eframe::App for CartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let view = self.cart.view();
        self.sync_row_state(&view);
        let blocked = view.removal_dialog_open || view.notice.is_some();

        self.show_header(ctx);
        self.show_totals_panel(ctx, &view, blocked);
        self.show_items_panel(ctx, &view, blocked);
        self.show_removal_dialog(ctx, view.removal_dialog_open);
        // The notice sits above the removal dialog when both are open.
        self.show_notice_dialog(ctx, view.notice.as_deref());

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
