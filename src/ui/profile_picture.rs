use gtk4::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::api::models::ImagePayload;
use crate::locale::Messages;
use crate::ui::prompt::GtkPrompter;
use crate::ui::{padded_box, Remote};
use crate::view::render::image_url;
use crate::view::{LoadState, ProfilePictureView};

pub type ProfileView = ProfilePictureView<Remote, GtkPrompter>;

pub struct ProfilePage {
    root: gtk::Box,
    current: gtk::Picture,
    preview: gtk::Picture,
    status: gtk::Label,
    submit: gtk::Button,
    chooser: RefCell<Option<gtk::FileChooserNative>>,
    asset_base: String,
    messages: &'static Messages,
    view: Rc<ProfileView>,
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

impl ProfilePage {
    pub fn new(
        view: Rc<ProfileView>,
        window: &impl IsA<gtk::Window>,
        asset_base: &str,
        messages: &'static Messages,
    ) -> Rc<Self> {
        let root = padded_box(gtk::Orientation::Vertical, 12, 24);
        root.set_halign(gtk::Align::Center);

        let current = gtk::Picture::new();
        current.set_size_request(200, 200);
        root.append(&current);

        let preview = gtk::Picture::new();
        preview.set_size_request(300, 300);
        root.append(&preview);

        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let choose = gtk::Button::with_label(messages.upload);
        let clear = gtk::Button::with_label(messages.remove);
        let submit = gtk::Button::with_label(messages.save);
        submit.add_css_class("suggested-action");
        buttons.append(&choose);
        buttons.append(&clear);
        buttons.append(&submit);
        root.append(&buttons);

        let status = gtk::Label::new(None);
        status.add_css_class("dim-label");
        root.append(&status);

        let page = Rc::new(Self {
            root,
            current,
            preview,
            status,
            submit: submit.clone(),
            chooser: RefCell::new(None),
            asset_base: asset_base.to_string(),
            messages,
            view,
        });

        {
            let page = page.clone();
            let window: gtk::Window = window.clone().upcast();
            choose.connect_clicked(move |_| {
                let chooser = gtk::FileChooserNative::new(
                    Some(page.messages.choose_image),
                    Some(&window),
                    gtk::FileChooserAction::Open,
                    None,
                    None,
                );
                let filter = gtk::FileFilter::new();
                filter.add_mime_type("image/*");
                chooser.add_filter(&filter);
                *page.chooser.borrow_mut() = Some(chooser.clone());
                let page = page.clone();
                chooser.connect_response(move |dlg, resp| {
                    if resp == gtk::ResponseType::Accept {
                        if let Some(path) = dlg.file().and_then(|f| f.path()) {
                            page.pick(&path);
                        }
                    }
                });
                chooser.show();
            });
        }
        {
            let page = page.clone();
            clear.connect_clicked(move |_| {
                page.view.clear_image();
                page.render();
            });
        }
        {
            let page = page.clone();
            submit.connect_clicked(move |_| {
                let page = page.clone();
                page.submit.set_sensitive(false);
                page.status.set_label(page.messages.saving);
                crate::utils::spawn_local(async move {
                    let _ = page.view.submit().await;
                    page.render();
                });
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

    fn pick(self: &Rc<Self>, path: &Path) {
        match std::fs::read(path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "image".to_string());
                self.view.select_image(ImagePayload::new(name, mime_for(path), bytes));
                self.preview.set_filename(Some(path));
            }
            Err(e) => {
                log::error!("failed to read {}: {}", path.display(), e);
                self.status.set_label(&format!("{}: {}", self.messages.read_failed, e));
            }
        }
        self.render();
    }

    fn render(&self) {
        if self.view.selected_image().is_none() {
            self.preview.set_paintable(gtk::gdk::Paintable::NONE);
        }
        match self.view.load_state() {
            LoadState::Idle | LoadState::Loading => self.status.set_label(self.messages.loading),
            LoadState::Failed => self.status.set_label(""),
            LoadState::Loaded => {
                let user = self.view.user();
                let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
                self.status.set_label(&name);
                match user.and_then(|u| u.profile) {
                    Some(key) if !key.is_empty() => {
                        let url = image_url(&self.asset_base, &key);
                        self.current.set_file(Some(&gtk::gio::File::for_uri(&url)));
                    }
                    _ => self.current.set_paintable(gtk::gdk::Paintable::NONE),
                }
            }
        }
        self.submit
            .set_sensitive(!self.view.is_submitting() && self.view.selected_image().is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::mime_for;
    use std::path::Path;

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a")), "application/octet-stream");
    }
}
