//! Value pools for the ru_RU-style random source.

pub(super) const FIRST_NAMES: &[&str] = &[
    "Александр", "Алексей", "Анатолий", "Андрей", "Антон", "Аркадий", "Борис", "Вадим",
    "Валентин", "Василий", "Виктор", "Виталий", "Владимир", "Всеволод", "Вячеслав", "Геннадий",
    "Георгий", "Григорий", "Даниил", "Денис", "Дмитрий", "Евгений", "Егор", "Иван", "Игорь",
    "Илья", "Кирилл", "Константин", "Лев", "Леонид", "Максим", "Михаил", "Никита", "Николай",
    "Олег", "Павел", "Пётр", "Роман", "Сергей", "Станислав", "Степан", "Тимофей", "Фёдор",
    "Юрий", "Ярослав", "Агафья", "Алла", "Алёна", "Анастасия", "Анна", "Антонина", "Валентина",
    "Валерия", "Вера", "Виктория", "Галина", "Дарья", "Евгения", "Екатерина", "Елена",
    "Елизавета", "Жанна", "Зинаида", "Зоя", "Инна", "Ирина", "Кира", "Клавдия", "Ксения",
    "Лариса", "Лидия", "Любовь", "Людмила", "Маргарита", "Марина", "Мария", "Надежда",
    "Наталья", "Нина", "Оксана", "Ольга", "Полина", "Раиса", "Светлана", "Софья", "Таисия",
    "Тамара", "Татьяна", "Ульяна", "Юлия",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
    "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семёнов", "Егоров",
    "Павлов", "Козлов", "Степанов", "Николаев", "Орлов", "Андреев", "Макаров", "Никитин",
    "Захаров", "Зайцев", "Соловьёв", "Борисов", "Яковлев", "Григорьев", "Романов", "Воробьёв",
    "Сергеев", "Кузьмин", "Фролов", "Александров", "Дмитриев", "Королёв", "Гусев", "Киселёв",
    "Иванова", "Смирнова", "Кузнецова", "Попова", "Васильева", "Петрова", "Соколова",
    "Михайлова", "Новикова", "Фёдорова", "Морозова", "Волкова", "Алексеева", "Лебедева",
    "Семёнова", "Егорова", "Павлова", "Козлова", "Степанова", "Николаева", "Орлова",
    "Андреева", "Макарова", "Никитина", "Захарова", "Зайцева", "Борисова", "Яковлева",
];

/// Transliterated stems used for user names and e-mail local parts.
pub(super) const LATIN_STEMS: &[&str] = &[
    "aleksandr", "aleksei", "andrei", "anton", "boris", "vadim", "vasili", "viktor", "vladimir",
    "gennadi", "georgi", "grigori", "daniil", "denis", "dmitri", "evgeni", "egor", "ivan",
    "igor", "ilia", "kirill", "konstantin", "lev", "leonid", "maksim", "mikhail", "nikita",
    "nikolai", "oleg", "pavel", "petr", "roman", "sergei", "stanislav", "stepan", "timofei",
    "fedor", "iuri", "iaroslav", "alla", "alena", "anastasiia", "anna", "valentina", "vera",
    "viktoriia", "galina", "daria", "ekaterina", "elena", "elizaveta", "zoia", "inna", "irina",
    "kira", "kseniia", "larisa", "lidiia", "liudmila", "margarita", "marina", "mariia",
    "nadezhda", "natalia", "nina", "oksana", "olga", "polina", "svetlana", "sofia", "tamara",
    "tatiana", "iuliia", "ivanov", "smirnov", "kuznetsov", "popov", "vasilev", "petrov",
    "sokolov", "mikhailov", "novikov", "fedorov", "morozov", "volkov", "alekseev", "lebedev",
    "semenov", "egorov", "pavlov", "kozlov", "stepanov", "nikolaev", "orlov", "andreev",
    "makarov", "nikitin", "zakharov", "zaitsev", "solovev", "borisov", "iakovlev", "romanov",
];

pub(super) const EMAIL_DOMAINS: &[&str] = &[
    "mail.ru", "yandex.ru", "ya.ru", "rambler.ru", "list.ru", "bk.ru", "inbox.ru", "gmail.com",
    "hotmail.com", "example.com", "example.org", "example.net",
];

pub(super) const PHONE_FORMATS: &[&str] = &[
    "+7 ### ### ####",
    "+7 ### ### ## ##",
    "+7 (###) ###-##-##",
    "+7 (###) ###-####",
    "8 ### ### ####",
    "8 ### ### ## ##",
    "8 (###) ###-##-##",
    "8 (###) ###-####",
    "8##########",
    "+7##########",
];

pub(super) const COUNTRIES: &[&str] = &[
    "Австралия", "Австрия", "Азербайджан", "Албания", "Алжир", "Ангола", "Аргентина", "Армения",
    "Афганистан", "Бангладеш", "Беларусь", "Бельгия", "Болгария", "Боливия", "Бразилия",
    "Великобритания", "Венгрия", "Венесуэла", "Вьетнам", "Гана", "Германия", "Греция", "Грузия",
    "Дания", "Египет", "Замбия", "Израиль", "Индия", "Индонезия", "Иордания", "Ирак", "Иран",
    "Ирландия", "Исландия", "Испания", "Италия", "Казахстан", "Камбоджа", "Камерун", "Канада",
    "Катар", "Кения", "Кипр", "Киргизия", "Китай", "Колумбия", "Куба", "Латвия", "Ливан",
    "Литва", "Люксембург", "Мальта", "Марокко", "Мексика", "Молдавия", "Монголия", "Непал",
    "Нигерия", "Нидерланды", "Новая Зеландия", "Норвегия", "Пакистан", "Перу", "Польша",
    "Португалия", "Россия", "Румыния", "Сербия", "Сингапур", "Сирия", "Словакия", "Словения",
    "США", "Таджикистан", "Таиланд", "Тунис", "Туркмения", "Турция", "Узбекистан", "Украина",
    "Уругвай", "Филиппины", "Финляндия", "Франция", "Хорватия", "Чехия", "Чили", "Швейцария",
    "Швеция", "Эстония", "Эфиопия", "Южная Корея", "Япония",
];

pub(super) const CITY_PREFIXES: &[&str] = &["г.", "г.", "г.", "п.", "с.", "д.", "клх", "ст."];

pub(super) const CITY_NAMES: &[&str] = &[
    "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань", "Нижний Новгород",
    "Челябинск", "Самара", "Омск", "Ростов-на-Дону", "Уфа", "Красноярск", "Воронеж", "Пермь",
    "Волгоград", "Краснодар", "Саратов", "Тюмень", "Тольятти", "Ижевск", "Барнаул",
    "Ульяновск", "Иркутск", "Хабаровск", "Ярославль", "Владивосток", "Махачкала", "Томск",
    "Оренбург", "Кемерово", "Новокузнецк", "Рязань", "Астрахань", "Пенза", "Липецк", "Киров",
    "Чебоксары", "Тула", "Калининград", "Курск", "Ставрополь", "Сочи", "Тверь", "Магнитогорск",
    "Иваново", "Брянск", "Белгород", "Сургут", "Владимир", "Архангельск", "Чита", "Калуга",
    "Смоленск", "Волжский", "Курган", "Орёл", "Череповец", "Вологда", "Мурманск", "Саранск",
    "Тамбов", "Стерлитамак", "Грозный", "Якутск", "Кострома", "Петрозаводск", "Таганрог",
    "Нижневартовск", "Йошкар-Ола", "Новороссийск", "Сыктывкар", "Нальчик", "Шахты", "Дзержинск",
];

pub(super) const PASSWORD_SPECIALS: &[u8] = b"!@#$%^&*()_+";
pub(super) const PASSWORD_DIGITS: &[u8] = b"0123456789";
pub(super) const PASSWORD_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(super) const PASSWORD_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
