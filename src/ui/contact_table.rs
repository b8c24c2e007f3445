use adw::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::api::models::RecordId;
use crate::locale::Messages;
use crate::ui::prompt::GtkPrompter;
use crate::ui::{clear_list, padded_box, parse_day, Remote};
use crate::view::render::{ContactRow, ListBody};
use crate::view::{ContactDetail, ContactView};

pub type ContactsView = ContactView<Remote, GtkPrompter>;

pub struct ContactPage {
    root: gtk::Box,
    total: gtk::Label,
    list: gtk::ListBox,
    window: gtk::Window,
    messages: &'static Messages,
    view: Rc<ContactsView>,
}

impl ContactPage {
    pub fn new(view: Rc<ContactsView>, window: &impl IsA<gtk::Window>, messages: &'static Messages) -> Rc<Self> {
        let root = padded_box(gtk::Orientation::Vertical, 8, 12);

        let header = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let total = gtk::Label::new(None);
        total.set_hexpand(true);
        total.set_halign(gtk::Align::Start);
        let from = gtk::Entry::new();
        from.set_placeholder_text(Some("YYYY-MM-DD"));
        let to = gtk::Entry::new();
        to.set_placeholder_text(Some("YYYY-MM-DD"));
        header.append(&total);
        header.append(&from);
        header.append(&to);
        root.append(&header);

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .child(&list)
            .build();
        root.append(&scroller);

        let page = Rc::new(Self {
            root,
            total,
            list,
            window: window.clone().upcast(),
            messages,
            view,
        });

        // Re-filter as soon as either day changes.
        for entry in [&from, &to] {
            let page = page.clone();
            let from = from.clone();
            let to = to.clone();
            entry.connect_changed(move |_| {
                page.view.set_day_range(parse_day(&from.text()), parse_day(&to.text()));
                page.render();
            });
        }

        page
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn mount(self: &Rc<Self>) {
        self.render();
        let page = self.clone();
        crate::utils::spawn_local(async move {
            let _ = page.view.mount().await;
            page.render();
        });
    }

    pub fn render(self: &Rc<Self>) {
        let screen = self.view.screen();
        self.total.set_label(&screen.total_label);
        clear_list(&self.list);
        match screen.body {
            ListBody::Skeleton { .. } => {
                let spinner = gtk::Spinner::new();
                spinner.set_spinning(true);
                spinner.set_margin_top(24);
                self.list.append(&spinner);
            }
            ListBody::Empty { message } => {
                let label = gtk::Label::new(Some(message));
                label.add_css_class("dim-label");
                label.set_margin_top(24);
                self.list.append(&label);
            }
            ListBody::Rows(rows) => {
                for row in rows {
                    let widget = self.row(row);
                    self.list.append(&widget);
                }
            }
        }
    }

    fn row(self: &Rc<Self>, row: ContactRow) -> gtk::Widget {
        let line = padded_box(gtk::Orientation::Horizontal, 12, 6);
        for (text, width) in [
            (row.index.to_string(), 4),
            (row.name.clone(), 16),
            (row.phone_number.clone(), 14),
            (row.email.clone(), 20),
            (row.comment.clone(), 28),
        ] {
            let cell = gtk::Label::new(Some(&text));
            cell.set_width_chars(width);
            cell.set_max_width_chars(width);
            cell.set_ellipsize(gtk::pango::EllipsizeMode::End);
            cell.set_xalign(0.0);
            line.append(&cell);
        }

        let detail_btn = gtk::Button::with_label(self.messages.details);
        detail_btn.add_css_class("suggested-action");
        let delete_btn = gtk::Button::with_label(self.messages.delete);
        delete_btn.add_css_class("destructive-action");
        line.append(&detail_btn);
        line.append(&delete_btn);

        {
            let page = self.clone();
            let id = row.id.clone();
            detail_btn.connect_clicked(move |_| {
                if let Some(detail) = page.view.show_detail(&id) {
                    page.present_detail(&detail);
                }
            });
        }
        {
            let page = self.clone();
            let id: RecordId = row.id;
            delete_btn.connect_clicked(move |_| {
                let page = page.clone();
                let id = id.clone();
                crate::utils::spawn_local(async move {
                    let _ = page.view.delete(&id).await;
                    page.render();
                });
            });
        }

        line.upcast()
    }

    /// Informational only: labels, no inputs, a single close response.
    fn present_detail(self: &Rc<Self>, detail: &ContactDetail) {
        let body = format!(
            "{}\n{}\n{}\n\n{}",
            detail.name(),
            detail.phone_number(),
            detail.email(),
            detail.comment()
        );
        let dialog = adw::MessageDialog::new(Some(&self.window), Some(self.messages.contact_detail_title), Some(&body));
        dialog.add_response("close", self.messages.close);
        dialog.set_close_response("close");
        let page = self.clone();
        dialog.connect_response(None, move |_, _| page.view.close_detail());
        dialog.present();
    }
}
