//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateAddressHandler, CreateContactHandler, LoginUserHandler, LogoutUserHandler,
    RegisterUserHandler, RemoveAddressHandler, RemoveContactHandler, UpdateAddressHandler,
    UpdateContactHandler, UpdateCurrentUserHandler,
    // Query handlers
    AuthenticateTokenHandler, GetAddressHandler, GetContactHandler, GetCurrentUserHandler,
    ListAddressesHandler, SearchContactsHandler,
    // Ports
    AddressRepositoryPort, ContactRepositoryPort, PasswordHasherPort, UserRepositoryPort,
    // Guard
    OwnershipGuard,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub contact_repo: Arc<dyn ContactRepositoryPort>,
    pub address_repo: Arc<dyn AddressRepositoryPort>,
    pub password_hasher: Arc<dyn PasswordHasherPort>,

    // ========== Command Handlers ==========
    pub register_user_handler: RegisterUserHandler,
    pub login_user_handler: LoginUserHandler,
    pub update_current_user_handler: UpdateCurrentUserHandler,
    pub logout_user_handler: LogoutUserHandler,
    pub create_contact_handler: CreateContactHandler,
    pub update_contact_handler: UpdateContactHandler,
    pub remove_contact_handler: RemoveContactHandler,
    pub create_address_handler: CreateAddressHandler,
    pub update_address_handler: UpdateAddressHandler,
    pub remove_address_handler: RemoveAddressHandler,

    // ========== Query Handlers ==========
    pub authenticate_token_handler: AuthenticateTokenHandler,
    pub get_current_user_handler: GetCurrentUserHandler,
    pub get_contact_handler: GetContactHandler,
    pub search_contacts_handler: SearchContactsHandler,
    pub get_address_handler: GetAddressHandler,
    pub list_addresses_handler: ListAddressesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        contact_repo: Arc<dyn ContactRepositoryPort>,
        address_repo: Arc<dyn AddressRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
    ) -> Self {
        let guard = OwnershipGuard::new(contact_repo.clone(), address_repo.clone());

        Self {
            // Ports
            user_repo: user_repo.clone(),
            contact_repo: contact_repo.clone(),
            address_repo: address_repo.clone(),
            password_hasher: password_hasher.clone(),

            // Command handlers
            register_user_handler: RegisterUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
            ),
            login_user_handler: LoginUserHandler::new(user_repo.clone(), password_hasher.clone()),
            update_current_user_handler: UpdateCurrentUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
            ),
            logout_user_handler: LogoutUserHandler::new(user_repo.clone()),
            create_contact_handler: CreateContactHandler::new(contact_repo.clone()),
            update_contact_handler: UpdateContactHandler::new(contact_repo.clone(), guard.clone()),
            remove_contact_handler: RemoveContactHandler::new(contact_repo.clone(), guard.clone()),
            create_address_handler: CreateAddressHandler::new(address_repo.clone(), guard.clone()),
            update_address_handler: UpdateAddressHandler::new(address_repo.clone(), guard.clone()),
            remove_address_handler: RemoveAddressHandler::new(address_repo.clone(), guard.clone()),

            // Query handlers
            authenticate_token_handler: AuthenticateTokenHandler::new(user_repo.clone()),
            get_current_user_handler: GetCurrentUserHandler::new(user_repo.clone()),
            get_contact_handler: GetContactHandler::new(guard.clone()),
            search_contacts_handler: SearchContactsHandler::new(contact_repo.clone()),
            get_address_handler: GetAddressHandler::new(guard.clone()),
            list_addresses_handler: ListAddressesHandler::new(address_repo.clone(), guard),
        }
    }
}
