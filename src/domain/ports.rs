pub trait ConfigProvider {
    fn users_file(&self) -> &str;
    fn appointments_file(&self) -> &str;
    fn resume(&self) -> bool;
}
