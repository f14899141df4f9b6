fn main() -> anyhow::Result<()> {
    kiosk_admin_lib::run()
}
