use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "lo")]
    Lao,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Lao => &LAO,
            Locale::English => &ENGLISH,
        }
    }
}

/// User-facing strings for notices, prompts and list chrome.
#[derive(Debug)]
pub struct Messages {
    pub error_title: &'static str,
    pub fetch_failed: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub delete_confirm_title: &'static str,
    pub delete_confirm_text: &'static str,
    pub deleted_title: &'static str,
    pub deleted_text: &'static str,
    pub delete_failed: &'static str,
    pub saved_title: &'static str,
    pub saved_text: &'static str,
    pub save_failed: &'static str,
    pub update_confirm_title: &'static str,
    pub updated_title: &'static str,
    pub update_failed_title: &'static str,
    pub not_authorized: &'static str,
    pub image_required: &'static str,
    pub total_prefix: &'static str,
    pub total_suffix: &'static str,
    pub empty_banners: &'static str,
    pub empty_contacts: &'static str,
    pub contact_detail_title: &'static str,
    // screen chrome
    pub tab_banners: &'static str,
    pub tab_contacts: &'static str,
    pub tab_profile: &'static str,
    pub settings: &'static str,
    pub filter: &'static str,
    pub delete: &'static str,
    pub details: &'static str,
    pub upload: &'static str,
    pub remove: &'static str,
    pub save: &'static str,
    pub user_id: &'static str,
    pub open: &'static str,
    pub loading: &'static str,
    pub saving: &'static str,
    pub choose_image: &'static str,
    pub read_failed: &'static str,
    pub login_title: &'static str,
    pub api_url: &'static str,
    pub access_token: &'static str,
    pub connect: &'static str,
    pub url_required: &'static str,
    pub invalid_url: &'static str,
    pub connecting: &'static str,
    pub connected: &'static str,
    pub saved_unverified: &'static str,
    pub settings_save_failed: &'static str,
}

impl Messages {
    pub fn total(&self, count: usize) -> String {
        format!("{} {} {}", self.total_prefix, count, self.total_suffix)
    }
}

pub static LAO: Messages = Messages {
    error_title: "ເກີດຂໍ້ຜິດພາດ",
    fetch_failed: "ບໍ່ສາມາດດຶງຂໍ້ມູນໄດ້",
    confirm: "ຢືນຢັນ",
    cancel: "ຍົກເລີກ",
    close: "ປິດ",
    delete_confirm_title: "ຢືນຢັນການລົບ",
    delete_confirm_text: "ທ່ານແນ່ໃຈບໍ່ວ່າຕ້ອງການລົບລາຍການນີ້?",
    deleted_title: "ລົບສຳເລັດ!",
    deleted_text: "ລາຍການຖືກລົບອອກແລ້ວ.",
    delete_failed: "ບໍ່ສາມາດລົບລາຍການໄດ້",
    saved_title: "ສຳເລັດ",
    saved_text: "ຂໍ້ມູນຖືກອັບເດດແລ້ວ",
    save_failed: "ບໍ່ສາມາດບັນທຶກຂໍ້ມູນໄດ້",
    update_confirm_title: "ທ່ານຕ້ອງການແກ້ໄຂຂໍ້ມູນນີ້ເລີຍບໍ່?",
    updated_title: "ແກ້ໄຂສຳເລັດ!",
    update_failed_title: "ແກ້ໄຂລົ້ມເຫຼວ",
    not_authorized: "ທ່ານບໍ່ມີສິດໃນການແກ້ໄຂ",
    image_required: "ກະລຸນາເລືອກຮູບພາບ",
    total_prefix: "ທັງໝົດ",
    total_suffix: "ລາຍການ",
    empty_banners: "ບໍ່ມີຂໍ້ມູນ Banner",
    empty_contacts: "ບໍ່ມີຂໍ້ມູນ",
    contact_detail_title: "ລາຍລະອຽດຂໍ້ມູນການຕິດຕໍ່",
    tab_banners: "ແບນເນີ",
    tab_contacts: "ການຕິດຕໍ່",
    tab_profile: "ຮູບໂປຣໄຟລ໌",
    settings: "ຕັ້ງຄ່າ",
    filter: "ຄົ້ນຫາ",
    delete: "ລົບ",
    details: "ລາຍລະອຽດ",
    upload: "ອັບໂຫລດ",
    remove: "ເອົາອອກ",
    save: "ບັນທຶກ",
    user_id: "ລະຫັດຜູ້ໃຊ້",
    open: "ເປີດ",
    loading: "ກຳລັງໂຫລດ…",
    saving: "ກຳລັງບັນທຶກ…",
    choose_image: "ເລືອກຮູບພາບ",
    read_failed: "ບໍ່ສາມາດອ່ານໄຟລ໌ໄດ້",
    login_title: "ເຊື່ອມຕໍ່ກັບ API",
    api_url: "ທີ່ຢູ່ API (ເຊັ່ນ https://api.example.com)",
    access_token: "Token ເຂົ້າໃຊ້",
    connect: "ເຊື່ອມຕໍ່",
    url_required: "ກະລຸນາປ້ອນທີ່ຢູ່ API",
    invalid_url: "ທີ່ຢູ່ API ບໍ່ຖືກຕ້ອງ",
    connecting: "ກຳລັງເຊື່ອມຕໍ່…",
    connected: "ເຊື່ອມຕໍ່ສຳເລັດ",
    saved_unverified: "ບັນທຶກແລ້ວ ແຕ່ເຊື່ອມຕໍ່ບໍ່ໄດ້",
    settings_save_failed: "ບໍ່ສາມາດບັນທຶກການຕັ້ງຄ່າໄດ້",
};

pub static ENGLISH: Messages = Messages {
    error_title: "Something went wrong",
    fetch_failed: "Could not load data",
    confirm: "Confirm",
    cancel: "Cancel",
    close: "Close",
    delete_confirm_title: "Confirm delete",
    delete_confirm_text: "Are you sure you want to delete this item?",
    deleted_title: "Deleted!",
    deleted_text: "The item has been removed.",
    delete_failed: "Could not delete the item",
    saved_title: "Done",
    saved_text: "The record has been updated",
    save_failed: "Could not save the data",
    update_confirm_title: "Apply this change now?",
    updated_title: "Updated!",
    update_failed_title: "Update failed",
    not_authorized: "You are not allowed to make this change",
    image_required: "Please choose an image",
    total_prefix: "Total",
    total_suffix: "items",
    empty_banners: "No banners",
    empty_contacts: "No contacts",
    contact_detail_title: "Contact details",
    tab_banners: "Banners",
    tab_contacts: "Contacts",
    tab_profile: "Profile picture",
    settings: "Settings",
    filter: "Filter",
    delete: "Delete",
    details: "Details",
    upload: "Upload",
    remove: "Remove",
    save: "Save",
    user_id: "User id",
    open: "Open",
    loading: "Loading…",
    saving: "Saving…",
    choose_image: "Choose an image",
    read_failed: "Could not read the file",
    login_title: "Connect to the broker API",
    api_url: "API URL (e.g. https://api.example.com)",
    access_token: "Access token",
    connect: "Connect",
    url_required: "Please enter the API URL",
    invalid_url: "Invalid API URL",
    connecting: "Connecting…",
    connected: "Connected",
    saved_unverified: "Saved, but the server did not answer",
    settings_save_failed: "Could not save the settings",
};
