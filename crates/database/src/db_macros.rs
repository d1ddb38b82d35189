#[macro_export]
macro_rules! define_current_read_commands {
    ($struct_name:ident) => {
        pub struct $struct_name<'a> {
            cmds: &'a mut $crate::DieselConnection,
        }

        impl<'a> $struct_name<'a> {
            pub fn new(cmds: &'a mut $crate::DieselConnection) -> Self {
                Self { cmds }
            }

            #[allow(dead_code)]
            pub fn read(&mut self) -> $crate::DbReadMode<'_> {
                $crate::DbReadMode(self.cmds)
            }

            pub fn conn(&mut self) -> &mut $crate::DieselConnection {
                self.cmds
            }
        }
    };
}

#[macro_export]
macro_rules! define_current_write_commands {
    ($struct_name:ident) => {
        pub struct $struct_name<'a> {
            cmds: &'a mut $crate::DieselConnection,
        }

        impl<'a> $struct_name<'a> {
            pub fn new(cmds: &'a mut $crate::DieselConnection) -> Self {
                Self { cmds }
            }

            #[allow(dead_code)]
            pub fn read(&mut self) -> $crate::DbReadMode<'_> {
                $crate::DbReadMode(self.cmds)
            }

            #[allow(dead_code)]
            pub fn write(&mut self) -> $crate::DbWriteMode<'_> {
                $crate::DbWriteMode(self.cmds)
            }

            pub fn conn(&mut self) -> &mut $crate::DieselConnection {
                self.cmds
            }
        }
    };
}
