pub mod roles;
pub mod users;

pub use roles::{Entity as RoleEntity, Model as RoleModel};
pub use users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};
