use derive_new::new;

// password_hash にはハッシュ化済みの資格情報を渡す。平文はストアに届かない。
#[derive(new)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
