use chrono::FixedOffset;
use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::filter::DateRange;
use crate::locale::Messages;
use crate::ui::prompt::GtkPrompter;
use crate::ui::{clear_flow, padded_box, parse_day, Remote};
use crate::view::render::{BannerCard, ListBody};
use crate::view::BannerListView;

pub type BannerView = BannerListView<Remote, GtkPrompter>;

pub struct BannerPage {
    root: gtk::Box,
    total: gtk::Label,
    grid: gtk::FlowBox,
    messages: &'static Messages,
    view: Rc<BannerView>,
}

impl BannerPage {
    pub fn new(view: Rc<BannerView>, offset: FixedOffset, messages: &'static Messages) -> Rc<Self> {
        let root = padded_box(gtk::Orientation::Vertical, 8, 12);

        let filter_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let from = gtk::Entry::new();
        from.set_placeholder_text(Some("YYYY-MM-DD"));
        let to = gtk::Entry::new();
        to.set_placeholder_text(Some("YYYY-MM-DD"));
        let apply = gtk::Button::with_label(messages.filter);
        filter_row.append(&from);
        filter_row.append(&to);
        filter_row.append(&apply);
        root.append(&filter_row);

        let total = gtk::Label::new(None);
        total.set_halign(gtk::Align::Start);
        root.append(&total);
        root.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let grid = gtk::FlowBox::new();
        grid.set_selection_mode(gtk::SelectionMode::None);
        grid.set_max_children_per_line(4);
        grid.set_row_spacing(12);
        grid.set_column_spacing(12);
        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .child(&grid)
            .build();
        root.append(&scroller);

        let page = Rc::new(Self {
            root,
            total,
            grid,
            messages,
            view,
        });

        {
            let page = page.clone();
            apply.connect_clicked(move |_| {
                let range = DateRange::from_picked_open_days(parse_day(&from.text()), parse_day(&to.text()), offset);
                page.view.set_date_range(range);
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
        clear_flow(&self.grid);
        match screen.body {
            ListBody::Skeleton { placeholders } => {
                for _ in 0..placeholders {
                    let spinner = gtk::Spinner::new();
                    spinner.set_spinning(true);
                    spinner.set_size_request(220, 280);
                    self.grid.insert(&spinner, -1);
                }
            }
            ListBody::Empty { message } => {
                let label = gtk::Label::new(Some(message));
                label.add_css_class("dim-label");
                self.grid.insert(&label, -1);
            }
            ListBody::Rows(cards) => {
                for card in cards {
                    let widget = self.card(card);
                    self.grid.insert(&widget, -1);
                }
            }
        }
    }

    fn card(self: &Rc<Self>, card: BannerCard) -> gtk::Widget {
        let frame = gtk::Frame::new(None);
        let body = padded_box(gtk::Orientation::Vertical, 4, 8);
        body.set_size_request(220, -1);

        let picture = gtk::Picture::for_file(&gtk::gio::File::for_uri(&card.image_url));
        picture.set_size_request(220, 140);
        picture.set_can_shrink(true);
        picture.set_keep_aspect_ratio(true);
        body.append(&picture);

        let title = gtk::Label::new(Some(&card.title));
        title.add_css_class("heading");
        title.set_wrap(true);
        title.set_halign(gtk::Align::Start);
        body.append(&title);

        let detail = gtk::Label::new(Some(&card.detail));
        detail.add_css_class("dim-label");
        detail.set_wrap(true);
        detail.set_lines(2);
        detail.set_ellipsize(gtk::pango::EllipsizeMode::End);
        detail.set_halign(gtk::Align::Start);
        body.append(&detail);

        let created = gtk::Label::new(Some(&card.created));
        created.set_halign(gtk::Align::Start);
        body.append(&created);

        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let switch = gtk::Switch::new();
        switch.set_active(card.published);
        switch.set_hexpand(true);
        switch.set_halign(gtk::Align::Start);
        let delete_btn = gtk::Button::with_label(self.messages.delete);
        delete_btn.add_css_class("destructive-action");
        actions.append(&switch);
        actions.append(&delete_btn);
        body.append(&actions);

        {
            let page = self.clone();
            let id = card.id.clone();
            switch.connect_state_set(move |_, published| {
                let page = page.clone();
                let id = id.clone();
                crate::utils::spawn_local(async move {
                    let _ = page.view.toggle_publish(&id, published).await;
                    page.render();
                });
                gtk::glib::Propagation::Proceed
            });
        }
        {
            let page = self.clone();
            let id = card.id.clone();
            delete_btn.connect_clicked(move |_| {
                let page = page.clone();
                let id = id.clone();
                crate::utils::spawn_local(async move {
                    let _ = page.view.delete(&id).await;
                    page.render();
                });
            });
        }

        frame.set_child(Some(&body));
        frame.upcast()
    }
}
