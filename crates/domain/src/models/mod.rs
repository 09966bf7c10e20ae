//! Domain models for SocialBoost.

pub mod admin;
pub mod order;
pub mod service;
pub mod setting;
pub mod testimonial;
pub mod user;

pub use admin::{Admin, AdminIdentity, AdminLoginRequest, CreateAdminRequest, SessionStatus};
pub use order::{
    CreateOrderRequest, CreatedOrder, NewOrder, Order, OrderStatus, UpdateOrderStatusRequest,
};
pub use service::{CreateServiceRequest, Service, UpdateServiceRequest};
pub use setting::{Setting, UpdateSettingRequest};
pub use testimonial::{Moderation, SubmitTestimonialRequest, Testimonial};
pub use user::{UpsertUserRequest, User};
