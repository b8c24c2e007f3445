use adw::prelude::*;
use adw::Application;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::models::RecordId;
use crate::api::{ApiClient, RuntimeBound};
use crate::app::AppState;
use crate::gateway::Gateway;
use crate::role::{current_role, RoleCipher};
use crate::storage::LocalStorage;
use crate::ui::banner_list::BannerPage;
use crate::ui::contact_table::ContactPage;
use crate::ui::profile_picture::ProfilePage;
use crate::ui::prompt::GtkPrompter;
use crate::view::{BannerListView, ContactView, ProfilePictureView};

pub fn show_main_window(app: &Application, state: AppState) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Broker Admin")
        .default_width(1200)
        .default_height(760)
        .build();

    let overlay = adw::ToastOverlay::new();
    let stack = adw::ViewStack::new();
    overlay.set_child(Some(&stack));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let switcher = adw::ViewSwitcher::builder()
        .stack(&stack)
        .policy(adw::ViewSwitcherPolicy::Wide)
        .build();
    header.set_title_widget(Some(&switcher));
    let messages = state.locale.messages();
    let settings_btn = gtk4::Button::with_label(messages.settings);
    header.pack_end(&settings_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));

    let offset = crate::utils::day_offset(state.utc_offset_minutes);
    let prompter = GtkPrompter::new(&window, &overlay);

    let client = match ApiClient::new(&state.base_url, state.token.clone()) {
        Ok(client) => RuntimeBound(client),
        Err(e) => {
            log::error!("cannot build API client: {}", e);
            crate::ui::login::show_login_window(app);
            return;
        }
    };

    let banners = Rc::new(BannerListView::new(
        client.clone(),
        Gateway::new(prompter.clone(), messages),
        state.asset_base_url.clone(),
        offset,
    ));
    let banner_page = BannerPage::new(banners.clone(), offset, messages);
    stack.add_titled(&banner_page.widget(), Some("banners"), messages.tab_banners);

    let contacts = Rc::new(ContactView::new(
        client.clone(),
        Gateway::new(prompter.clone(), messages),
        offset,
    ));
    let contact_page = ContactPage::new(contacts.clone(), &window, messages);
    stack.add_titled(&contact_page.widget(), Some("contacts"), messages.tab_contacts);

    let role = match LocalStorage::open_default() {
        Ok(storage) => current_role(&storage, &RoleCipher::new(state.role_secret.clone())),
        Err(e) => {
            log::error!("local storage unavailable: {}", e);
            None
        }
    };

    // Profile picture editor: pick a user id, then edit that user's picture.
    let profile_root = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    let picker = crate::ui::padded_box(gtk4::Orientation::Horizontal, 6, 12);
    let user_entry = gtk4::Entry::new();
    user_entry.set_placeholder_text(Some(messages.user_id));
    let open_btn = gtk4::Button::with_label(messages.open);
    picker.append(&user_entry);
    picker.append(&open_btn);
    profile_root.append(&picker);
    let profile_slot = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    profile_root.append(&profile_slot);
    stack.add_titled(&profile_root, Some("profile"), messages.tab_profile);

    let active_profile: Rc<RefCell<Option<Rc<ProfilePage>>>> = Rc::new(RefCell::new(None));
    let profile_views: Rc<RefCell<Option<Rc<crate::ui::profile_picture::ProfileView>>>> =
        Rc::new(RefCell::new(None));
    {
        let window = window.clone();
        let client = client.clone();
        let prompter = prompter.clone();
        let asset_base = state.asset_base_url.clone();
        let profile_views = profile_views.clone();
        let open = move || {
            let id = user_entry.text().trim().to_string();
            if id.is_empty() {
                return;
            }
            if let Some(previous) = profile_views.borrow_mut().take() {
                previous.unmount();
            }
            let view = Rc::new(ProfilePictureView::new(
                RecordId::from(id.as_str()),
                client.clone(),
                Gateway::new(prompter.clone(), messages),
                role.clone(),
            ));
            let page = ProfilePage::new(view.clone(), &window, &asset_base, messages);
            crate::ui::clear_box(&profile_slot);
            profile_slot.append(&page.widget());
            page.mount();
            *profile_views.borrow_mut() = Some(view);
            *active_profile.borrow_mut() = Some(page);
        };
        open_btn.connect_clicked(move |_| open());
    }

    {
        let app = app.clone();
        let window = window.clone();
        let banners = banners.clone();
        let contacts = contacts.clone();
        let profile_views = profile_views.clone();
        settings_btn.connect_clicked(move |_| {
            crate::ui::login::show_login_window(&app);
            banners.unmount();
            contacts.unmount();
            if let Some(view) = profile_views.borrow_mut().take() {
                view.unmount();
            }
            window.close();
        });
    }

    {
        let banners = banners.clone();
        let contacts = contacts.clone();
        window.connect_close_request(move |_| {
            banners.unmount();
            contacts.unmount();
            if let Some(view) = profile_views.borrow_mut().take() {
                view.unmount();
            }
            gtk4::glib::Propagation::Proceed
        });
    }

    window.present();
    banner_page.mount();
    contact_page.mount();
}
