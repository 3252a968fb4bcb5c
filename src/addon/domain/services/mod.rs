pub mod mysql_addon_command_service;
