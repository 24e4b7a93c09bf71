//! Bundled translation tables. Values use `{{name}}` placeholders.

pub(super) const RU: &[(&str, &str)] = &[
    ("notifications.titles.error", "Ошибка"),
    ("notifications.titles.success", "Успех"),
    ("notifications.titles.warning", "Предупреждение"),
    ("notifications.titles.info", "Информация"),
    ("common.saving", "Сохранение..."),
    ("common.save", "Сохранить"),
    ("common.create", "Создать"),
    ("common.cancel", "Отмена"),
    ("common.loading", "Загрузка..."),
    ("select.searchPlaceholder", "Поиск..."),
    ("select.noResults", "Ничего не найдено"),
    ("select.clear", "Очистить"),
    ("app.notFound", "Страница не найдена"),
    ("users.newUser", "Создание нового пользователя"),
    ("users.editUser", "Редактирование пользователя"),
    ("users.editingUser", "Редактирование пользователя {{userName}}"),
    ("users.fields.firstName", "Имя"),
    ("users.fields.lastName", "Фамилия"),
    ("users.fields.middleName", "Отчество"),
    ("users.fields.phone", "Телефон"),
    ("users.fields.email", "Email"),
    ("users.fields.login", "Логин"),
    ("users.fields.city", "Город"),
    ("users.fields.street", "Улица"),
    ("users.fields.house", "Дом"),
    ("users.fields.apartmentNumber", "Номер квартиры"),
    ("users.fields.apartmentArea", "Площадь квартиры"),
    ("users.fields.accountNumber", "Лицевой счёт"),
    ("users.fields.status", "Статус"),
    ("users.fields.password", "Пароль"),
    ("users.fields.repeatPassword", "Повторите пароль"),
    ("users.photo.upload", "Загрузить фото"),
    ("users.photo.reset", "Сбросить"),
    ("users.photo.hint", "JPG, GIF или PNG. Не более 800KB"),
    ("users.placeholders.selectCity", "Выберите город"),
    ("users.placeholders.selectCityFirst", "Сначала выберите город"),
    ("users.placeholders.selectStreetFirst", "Сначала выберите улицу"),
    ("users.placeholders.selectStatus", "Выберите статус"),
    ("users.statusOptions.active", "Активный"),
    ("users.statusOptions.inactive", "Неактивный"),
    ("users.statusOptions.blocked", "Заблокирован"),
    ("users.success.created", "Пользователь {{userName}} успешно создан"),
    ("users.success.updated", "Пользователь {{userName}} успешно обновлён"),
    ("users.errors.initialization", "Ошибка при инициализации страницы"),
    ("users.errors.loadFailed", "Не удалось загрузить данные пользователя"),
    ("users.errors.loadStreets", "Не удалось загрузить улицы"),
    ("users.errors.loadHouses", "Не удалось загрузить дома"),
    ("users.errors.searchFailed", "Ошибка поиска"),
    ("users.errors.populateForm", "Ошибка при заполнении формы"),
    ("users.errors.saveFailed", "Ошибка при сохранении данных"),
    ("users.errors.validation", "Проверьте правильность заполнения полей"),
    ("users.validation.invalidFileType", "Допустимы только изображения JPG, PNG или GIF"),
    ("users.validation.fileTooLarge", "Размер файла не должен превышать {{maxSize}}"),
    ("users.validation.firstName.NotBlank", "Укажите имя"),
    ("users.validation.firstName.Size", "Имя должно быть от 2 до 50 символов"),
    ("users.validation.lastName.NotBlank", "Укажите фамилию"),
    ("users.validation.email.NotBlank", "Укажите email"),
    ("users.validation.email.Email", "Некорректный email"),
    ("users.validation.login.NotBlank", "Укажите логин"),
    ("users.validation.login.Size", "Логин должен быть от 3 до 50 символов"),
    ("users.validation.houseId.NotNull", "Выберите дом"),
    ("users.validation.password.Mismatch", "Пароли не совпадают"),
    ("houses.newHouse", "Создание нового дома"),
    ("houses.editHouse", "Редактирование дома"),
    ("houses.editingHouse", "Редактирование дома {{houseNumber}}"),
    ("houses.fields.houseNumber", "Номер дома"),
    ("houses.fields.city", "Город"),
    ("houses.fields.street", "Улица"),
    ("houses.fields.status", "Статус"),
    ("houses.fields.chairman", "Председатель"),
    ("houses.placeholders.selectCity", "Выберите город"),
    ("houses.placeholders.selectCityFirst", "Сначала выберите город"),
    ("houses.placeholders.selectStatus", "Выберите статус"),
    ("houses.placeholders.selectChairman", "Выберите председателя"),
    ("houses.statusOptions.new", "Новый"),
    ("houses.statusOptions.active", "Активный"),
    ("houses.statusOptions.deactivated", "Деактивирован"),
    ("houses.statusOptions.blocked", "Заблокирован"),
    ("houses.success.created", "Дом {{houseNumber}} успешно создан"),
    ("houses.success.updated", "Дом {{houseNumber}} успешно обновлён"),
    ("houses.errors.initialization", "Ошибка при инициализации страницы"),
    ("houses.errors.loadFailed", "Ошибка при загрузке данных дома"),
    ("houses.errors.loadStreets", "Не удалось загрузить улицы"),
    ("houses.errors.searchFailed", "Ошибка поиска"),
    ("houses.errors.populateForm", "Ошибка при заполнении формы"),
    ("houses.errors.saveFailed", "Ошибка при сохранении данных"),
    ("houses.errors.validation", "Ошибка валидации данных"),
];

pub(super) const EN: &[(&str, &str)] = &[
    ("notifications.titles.error", "Error"),
    ("notifications.titles.success", "Success"),
    ("notifications.titles.warning", "Warning"),
    ("notifications.titles.info", "Information"),
    ("common.saving", "Saving..."),
    ("common.save", "Save"),
    ("common.create", "Create"),
    ("common.cancel", "Cancel"),
    ("common.loading", "Loading..."),
    ("select.searchPlaceholder", "Search..."),
    ("select.noResults", "No results found"),
    ("select.clear", "Clear"),
    ("app.notFound", "Page not found"),
    ("users.newUser", "New user"),
    ("users.editUser", "Edit user"),
    ("users.editingUser", "Editing user {{userName}}"),
    ("users.fields.firstName", "First name"),
    ("users.fields.lastName", "Last name"),
    ("users.fields.middleName", "Middle name"),
    ("users.fields.phone", "Phone"),
    ("users.fields.email", "Email"),
    ("users.fields.login", "Login"),
    ("users.fields.city", "City"),
    ("users.fields.street", "Street"),
    ("users.fields.house", "House"),
    ("users.fields.apartmentNumber", "Apartment number"),
    ("users.fields.apartmentArea", "Apartment area"),
    ("users.fields.accountNumber", "Account number"),
    ("users.fields.status", "Status"),
    ("users.fields.password", "Password"),
    ("users.fields.repeatPassword", "Repeat password"),
    ("users.photo.upload", "Upload photo"),
    ("users.photo.reset", "Reset"),
    ("users.photo.hint", "JPG, GIF or PNG. Max size of 800KB"),
    ("users.placeholders.selectCity", "Select a city"),
    ("users.placeholders.selectCityFirst", "Select a city first"),
    ("users.placeholders.selectStreetFirst", "Select a street first"),
    ("users.placeholders.selectStatus", "Select a status"),
    ("users.statusOptions.active", "Active"),
    ("users.statusOptions.inactive", "Inactive"),
    ("users.statusOptions.blocked", "Blocked"),
    ("users.success.created", "User {{userName}} was created"),
    ("users.success.updated", "User {{userName}} was updated"),
    ("users.errors.initialization", "Failed to initialize the page"),
    ("users.errors.loadFailed", "Failed to load the user"),
    ("users.errors.loadStreets", "Failed to load streets"),
    ("users.errors.loadHouses", "Failed to load houses"),
    ("users.errors.searchFailed", "Search failed"),
    ("users.errors.populateForm", "Failed to fill in the form"),
    ("users.errors.saveFailed", "Failed to save data"),
    ("users.errors.validation", "Please check the highlighted fields"),
    ("users.validation.invalidFileType", "Only JPG, PNG or GIF images are allowed"),
    ("users.validation.fileTooLarge", "File size must not exceed {{maxSize}}"),
    ("users.validation.firstName.NotBlank", "First name is required"),
    ("users.validation.firstName.Size", "First name must be 2 to 50 characters"),
    ("users.validation.lastName.NotBlank", "Last name is required"),
    ("users.validation.email.NotBlank", "Email is required"),
    ("users.validation.email.Email", "Email is invalid"),
    ("users.validation.login.NotBlank", "Login is required"),
    ("users.validation.login.Size", "Login must be 3 to 50 characters"),
    ("users.validation.houseId.NotNull", "Select a house"),
    ("users.validation.password.Mismatch", "Passwords do not match"),
    ("houses.newHouse", "New house"),
    ("houses.editHouse", "Edit house"),
    ("houses.editingHouse", "Editing house {{houseNumber}}"),
    ("houses.fields.houseNumber", "House number"),
    ("houses.fields.city", "City"),
    ("houses.fields.street", "Street"),
    ("houses.fields.status", "Status"),
    ("houses.fields.chairman", "Chairman"),
    ("houses.placeholders.selectCity", "Select a city"),
    ("houses.placeholders.selectCityFirst", "Select a city first"),
    ("houses.placeholders.selectStatus", "Select a status"),
    ("houses.placeholders.selectChairman", "Select a chairman"),
    ("houses.statusOptions.new", "New"),
    ("houses.statusOptions.active", "Active"),
    ("houses.statusOptions.deactivated", "Deactivated"),
    ("houses.statusOptions.blocked", "Blocked"),
    ("houses.success.created", "House {{houseNumber}} was created"),
    ("houses.success.updated", "House {{houseNumber}} was updated"),
    ("houses.errors.initialization", "Failed to initialize the page"),
    ("houses.errors.loadFailed", "Failed to load the house"),
    ("houses.errors.loadStreets", "Failed to load streets"),
    ("houses.errors.searchFailed", "Search failed"),
    ("houses.errors.populateForm", "Failed to fill in the form"),
    ("houses.errors.saveFailed", "Failed to save data"),
    ("houses.errors.validation", "Data validation failed"),
];
